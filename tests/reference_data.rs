mod common;

use toycycle_api::{
    dto::{
        inventory::InventoryRequest,
        locations::LocationRequest,
        lookups::LookupRequest,
        partners::PartnerRequest,
        pickups::SchedulePickupRequest,
    },
    error::AppError,
    services::{
        accessory_type_service, inventory_service, location_service, partner_service,
        pickup_service, toy_condition_service,
    },
};

#[tokio::test]
async fn partner_crud_round() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let created = partner_service::create_partner(
        &state,
        &admin,
        PartnerRequest {
            name: "  Riverside Shelter ".into(),
            description: Some("Family shelter".into()),
            logo_url: Some("".into()),
            logo_hint: None,
        },
    )
    .await?
    .data
    .expect("partner");
    assert_eq!(created.name, "Riverside Shelter");
    assert!(created.logo_url.is_none());

    let updated = partner_service::update_partner(
        &state,
        &admin,
        created.id,
        PartnerRequest {
            name: "Riverside Family Shelter".into(),
            description: None,
            logo_url: Some("https://example.org/logo.png".into()),
            logo_hint: Some("shelter logo".into()),
        },
    )
    .await?
    .data
    .expect("partner");
    assert_eq!(updated.name, "Riverside Family Shelter");
    assert!(updated.description.is_none());

    let listed = partner_service::list_partners(&state).await?.data.expect("list");
    assert!(listed.items.iter().any(|p| p.id == created.id));

    partner_service::delete_partner(&state, &admin, created.id).await?;
    let missing = partner_service::get_partner(&state, created.id).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn reference_writes_require_admin() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let result = location_service::create_location(
        &state,
        &donor,
        LocationRequest {
            name: "Eastside Hub".into(),
            address: "12 Market Street".into(),
            hours: None,
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Forbidden)));

    let result = toy_condition_service::delete_toy_condition(&state, &donor, 1).await;
    assert!(matches!(result, Err(AppError::Forbidden)));
    Ok(())
}

#[tokio::test]
async fn blank_names_are_field_errors() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let result =
        accessory_type_service::create_accessory_type(&state, &admin, LookupRequest { name: "   ".into() })
            .await;
    match result {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields["name"], vec!["Name is required".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn lookup_in_use_cannot_be_deleted() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    pickup_service::create_pickup(
        &state.orm,
        SchedulePickupRequest {
            name: "Dana Donor".into(),
            email: "dana@example.com".into(),
            pickup_type: "my-address".into(),
            address: Some("221 Baker Street, London".into()),
            location_id: None,
            partner_id: None,
            pickup_date: chrono::NaiveDate::from_ymd_opt(2026, 5, 4),
            time_slot: "9am - 12pm".into(),
            toy_condition_id: Some(1),
            accessory_type_id: Some(1),
            notes: None,
            collection_cost: None,
        },
    )
    .await?;

    let result = accessory_type_service::delete_accessory_type(&state, &admin, 1).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let result = accessory_type_service::delete_accessory_type(&state, &admin, 999).await;
    assert!(matches!(result, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn condition_held_by_inventory_cannot_be_deleted() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let worn = toy_condition_service::create_toy_condition(
        &state,
        &admin,
        LookupRequest { name: "Needs repair".into() },
    )
    .await?
    .data
    .expect("condition");
    let spare = toy_condition_service::create_toy_condition(
        &state,
        &admin,
        LookupRequest { name: "Unused".into() },
    )
    .await?
    .data
    .expect("condition");

    inventory_service::create_inventory_item(
        &state,
        &admin,
        InventoryRequest {
            name: "Rocking horse".into(),
            description: None,
            condition_id: Some(worn.id),
            status: "received".into(),
            image_url: None,
            image_hint: None,
            redistributed_to_partner_id: None,
        },
    )
    .await?;

    let result = toy_condition_service::delete_toy_condition(&state, &admin, worn.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    toy_condition_service::delete_toy_condition(&state, &admin, spare.id).await?;
    let gone = toy_condition_service::get_toy_condition(&state, spare.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    Ok(())
}
