mod common;

use chrono::NaiveDate;
use toycycle_api::{
    dto::pickups::{SchedulePickupRequest, UpdatePickupStatusRequest, WorkflowQuery},
    error::AppError,
    models::{PickupStatus, PickupType},
    services::{dashboard_service, pickup_service, workflow_service},
};

fn day(d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 11, d)
}

fn form(pickup_type: PickupType, email: &str, date: Option<NaiveDate>) -> SchedulePickupRequest {
    SchedulePickupRequest {
        name: "Dana Donor".into(),
        email: email.into(),
        pickup_type: pickup_type.as_str().into(),
        address: Some("221 Baker Street, London".into()),
        location_id: Some(1),
        partner_id: Some(2),
        pickup_date: date,
        time_slot: "9am - 12pm".into(),
        toy_condition_id: Some(1),
        accessory_type_id: Some(1),
        notes: Some("  ".into()),
        collection_cost: None,
    }
}

#[tokio::test]
async fn schedule_keeps_only_the_chosen_place() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let resp = pickup_service::schedule_pickup(
        &state,
        &donor,
        form(PickupType::DropOff, " Dana@Example.com ", day(3)),
    )
    .await?;
    assert_eq!(resp.message, "Pickup scheduled successfully.");

    let pickup = resp.data.expect("pickup");
    assert_eq!(pickup.email, "dana@example.com");
    assert_eq!(pickup.location_id, Some(1));
    assert!(pickup.address.is_none());
    assert!(pickup.partner_id.is_none());
    assert!(pickup.notes.is_none());
    assert_eq!(pickup.status, PickupStatus::Scheduled.as_str());
    Ok(())
}

#[tokio::test]
async fn type_specific_fields_are_required() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let mut short_address = form(PickupType::MyAddress, "dana@example.com", day(3));
    short_address.address = Some("Main St".into());
    short_address.pickup_date = None;
    match pickup_service::schedule_pickup(&state, &donor, short_address).await {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields["address"], vec!["Please enter a valid address.".to_string()]);
            assert_eq!(fields["pickup_date"], vec!["A pickup date is required.".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut no_partner = form(PickupType::Partner, "dana@example.com", day(3));
    no_partner.partner_id = None;
    match pickup_service::schedule_pickup(&state, &donor, no_partner).await {
        Err(AppError::Validation(fields)) => assert!(fields.contains_key("partner_id")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut unknown_location = form(PickupType::DropOff, "dana@example.com", day(3));
    unknown_location.location_id = Some(404);
    match pickup_service::schedule_pickup(&state, &donor, unknown_location).await {
        Err(AppError::Validation(fields)) => assert!(fields.contains_key("location_id")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut bad_type = form(PickupType::DropOff, "dana@example.com", day(3));
    bad_type.pickup_type = "courier".into();
    match pickup_service::schedule_pickup(&state, &donor, bad_type).await {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields["pickup_type"], vec!["Please select a pickup type.".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn donors_see_only_their_own_pickups() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;
    let dana = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;
    let sam = common::register_donor(&state, "Sam Giver", "sam@example.com").await?;

    pickup_service::schedule_pickup(&state, &dana, form(PickupType::DropOff, "dana@example.com", day(3))).await?;
    pickup_service::schedule_pickup(&state, &sam, form(PickupType::Partner, "sam@example.com", day(3))).await?;
    pickup_service::schedule_pickup(&state, &sam, form(PickupType::MyAddress, "sam@example.com", day(7))).await?;

    let date = day(3).expect("date");
    let for_dana = pickup_service::list_for_date(&state, &dana, date).await?.data.expect("list");
    assert_eq!(for_dana.items.len(), 1);
    assert_eq!(
        for_dana.items[0].location.as_ref().map(|l| l.id),
        Some(1)
    );

    let for_admin = pickup_service::list_for_date(&state, &admin, date).await?.data.expect("list");
    assert_eq!(for_admin.items.len(), 2);

    let days = pickup_service::scheduled_days(&state).await?.data.expect("days");
    assert_eq!(days.dates, vec![date, day(7).expect("date")]);

    let workflow = workflow_service::list_workflow(
        &state,
        &admin,
        WorkflowQuery {
            partner_id: Some(2),
            ..WorkflowQuery::default()
        },
    )
    .await?;
    let items = workflow.data.expect("list").items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].partner.as_ref().map(|p| p.id), Some(2));

    let forbidden = workflow_service::list_workflow(&state, &dana, WorkflowQuery::default()).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden)));

    let by_location = dashboard_service::donations_by_location(&state, &admin)
        .await?
        .data
        .expect("counts");
    let counts: Vec<i64> = by_location.items.iter().map(|row| row.count).collect();
    assert_eq!(counts, vec![1, 0]);
    Ok(())
}

#[tokio::test]
async fn status_updates_and_deletes() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;
    let dana = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;
    let sam = common::register_donor(&state, "Sam Giver", "sam@example.com").await?;
    let pickup = pickup_service::schedule_pickup(
        &state,
        &dana,
        form(PickupType::DropOff, "dana@example.com", day(3)),
    )
    .await?
    .data
    .expect("pickup");

    let by_donor = pickup_service::update_pickup_status(
        &state,
        &dana,
        pickup.id,
        UpdatePickupStatusRequest { status: "completed".into() },
    )
    .await;
    assert!(matches!(by_donor, Err(AppError::Forbidden)));

    let updated = pickup_service::update_pickup_status(
        &state,
        &admin,
        pickup.id,
        UpdatePickupStatusRequest { status: "completed".into() },
    )
    .await?;
    assert_eq!(updated.message, "Pickup status updated to completed.");

    let invalid = pickup_service::update_pickup_status(
        &state,
        &admin,
        pickup.id,
        UpdatePickupStatusRequest { status: "lost".into() },
    )
    .await;
    assert!(matches!(invalid, Err(AppError::Validation(_))));

    let by_stranger = pickup_service::delete_pickup(&state, &sam, pickup.id).await;
    assert!(matches!(by_stranger, Err(AppError::Forbidden)));

    let deleted = pickup_service::delete_pickup(&state, &dana, pickup.id).await?;
    assert_eq!(deleted.message, "Pickup successfully deleted.");

    let gone = pickup_service::delete_pickup(&state, &admin, pickup.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    Ok(())
}
