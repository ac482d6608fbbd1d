mod common;

use toycycle_api::{
    dto::{
        donations::RecordDonationRequest,
        ecommerce::{IntegrationRequest, IntegrationUpdateRequest},
        inventory::{InventoryQuery, InventoryRequest},
    },
    error::AppError,
    models::{InventoryStatus, LogisticsStatus},
    services::{
        dashboard_service, donation_service, ecommerce_service, inventory_service,
        logistics_service,
    },
};

fn item(name: &str, status: &str, partner: Option<i32>) -> InventoryRequest {
    InventoryRequest {
        name: name.into(),
        description: None,
        condition_id: Some(1),
        status: status.into(),
        image_url: None,
        image_hint: None,
        redistributed_to_partner_id: partner,
    }
}

// Item is received, redistributed to a partner, then recollected.
#[tokio::test]
async fn redistribution_and_recollection_flow() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let created = inventory_service::create_inventory_item(
        &state,
        &admin,
        item("Wooden train", "received", None),
    )
    .await?
    .data
    .expect("item");
    assert_eq!(created.status, InventoryStatus::Received.as_str());
    assert_eq!(created.condition_name.as_deref(), Some("New"));
    assert!(created.logistics_status.is_none());

    let early = logistics_service::mark_recollected(&state, &admin, created.id).await;
    assert!(matches!(early, Err(AppError::Conflict(_))));

    let redistributed = inventory_service::update_inventory_item(
        &state,
        &admin,
        created.id,
        item("Wooden train", "redistributed", Some(1)),
    )
    .await?
    .data
    .expect("item");
    assert_eq!(
        redistributed.logistics_status.as_deref(),
        Some(LogisticsStatus::Delivered.as_str())
    );

    let list = logistics_service::list_redistributed(&state, &admin)
        .await?
        .data
        .expect("list");
    assert_eq!(list.items.len(), 1);
    assert_eq!(
        list.items[0].partner.as_ref().map(|p| p.id),
        Some(1)
    );

    let requested = logistics_service::request_recollection(&state, &admin, created.id).await?;
    assert_eq!(requested.message, "Recollection has been requested.");

    let again = logistics_service::request_recollection(&state, &admin, created.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let done = logistics_service::mark_recollected(&state, &admin, created.id)
        .await?
        .data
        .expect("item");
    assert_eq!(
        done.logistics_status.as_deref(),
        Some(LogisticsStatus::Recollected.as_str())
    );
    Ok(())
}

#[tokio::test]
async fn recollection_needs_a_partnered_redistribution() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let received = inventory_service::create_inventory_item(
        &state,
        &admin,
        item("Jigsaw", "received", None),
    )
    .await?
    .data
    .expect("item");
    let result = logistics_service::request_recollection(&state, &admin, received.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unassigned = inventory_service::create_inventory_item(
        &state,
        &admin,
        item("Kite", "redistributed", None),
    )
    .await?
    .data
    .expect("item");
    let result = logistics_service::request_recollection(&state, &admin, unassigned.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let missing = logistics_service::request_recollection(&state, &admin, 9_999).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn leaving_redistribution_clears_logistics() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let created = inventory_service::create_inventory_item(
        &state,
        &admin,
        item("Drum", "redistributed", Some(2)),
    )
    .await?
    .data
    .expect("item");
    logistics_service::request_recollection(&state, &admin, created.id).await?;

    let relisted = inventory_service::update_inventory_item(
        &state,
        &admin,
        created.id,
        item("Drum", "listed", None),
    )
    .await?
    .data
    .expect("item");
    assert!(relisted.logistics_status.is_none());
    assert!(relisted.redistributed_to_partner_id.is_none());

    let result = logistics_service::mark_recollected(&state, &admin, created.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn inventory_list_filters_and_counts() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;
    for (name, status) in [("Blocks", "received"), ("Puzzle", "listed"), ("Doll", "listed")] {
        inventory_service::create_inventory_item(&state, &admin, item(name, status, None)).await?;
    }

    let listed = inventory_service::list_inventory(
        &state,
        &admin,
        InventoryQuery {
            page: None,
            per_page: None,
            status: Some("listed".into()),
        },
    )
    .await?;
    assert_eq!(listed.data.expect("list").items.len(), 2);
    assert_eq!(listed.meta.expect("meta").total, Some(2));

    let counts = inventory_service::counts_by_status(&state.orm).await?;
    assert_eq!(counts.len(), InventoryStatus::ALL.len());
    let sanitizing = counts.iter().find(|c| c.status == "sanitizing").expect("row");
    assert_eq!(sanitizing.count, 0);

    let bad = inventory_service::create_inventory_item(
        &state,
        &admin,
        item("Kite", "lost", None),
    )
    .await;
    assert!(matches!(bad, Err(AppError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn donations_are_credited_once() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;
    let created = inventory_service::create_inventory_item(
        &state,
        &admin,
        item("Teddy bear", "redistributed", Some(2)),
    )
    .await?
    .data
    .expect("item");

    let request = || RecordDonationRequest {
        user_id: Some(donor.user_id),
        inventory_id: Some(created.id),
    };
    donation_service::record_donation(&state, &admin, request()).await?;
    let duplicate = donation_service::record_donation(&state, &admin, request()).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let mine = donation_service::list_my_donations(&state, &donor)
        .await?
        .data
        .expect("list");
    assert_eq!(mine.items.len(), 1);
    assert_eq!(
        mine.items[0].inventory.as_ref().map(|i| i.name.as_str()),
        Some("Teddy bear")
    );

    let report = dashboard_service::impact_report(&state, &donor)
        .await?
        .data
        .expect("report");
    assert!(!report.generated);
    assert_eq!(report.stats.toys_redistributed, 1);
    assert_eq!(report.stats.user_donations, Some(1));

    let stats = dashboard_service::stats(&state, &admin).await?.data.expect("stats");
    assert_eq!(stats.total_donations, 1);
    assert_eq!(stats.redistribution_rate, 100.0);

    let forbidden = dashboard_service::stats(&state, &donor).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden)));
    Ok(())
}

#[tokio::test]
async fn integration_secrets_are_masked() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;
    let created = ecommerce_service::create_integration(
        &state,
        &admin,
        IntegrationRequest {
            platform: "Shopify".into(),
            api_key: "key-123".into(),
            api_secret: "supersecretvalue".into(),
        },
    )
    .await?
    .data
    .expect("integration");
    assert_ne!(created.api_secret, "supersecretvalue");
    assert!(created.api_secret.ends_with("alue"));

    let renamed = ecommerce_service::update_integration(
        &state,
        &admin,
        created.id,
        IntegrationUpdateRequest {
            platform: "Shopify Plus".into(),
            api_key: "key-456".into(),
            api_secret: None,
        },
    )
    .await?
    .data
    .expect("integration");
    assert_eq!(renamed.platform, "Shopify Plus");
    assert_eq!(renamed.api_secret, created.api_secret);

    let rotated = ecommerce_service::update_integration(
        &state,
        &admin,
        created.id,
        IntegrationUpdateRequest {
            platform: "Shopify Plus".into(),
            api_key: "key-456".into(),
            api_secret: Some("rotatedsecret9876".into()),
        },
    )
    .await?
    .data
    .expect("integration");
    assert!(rotated.api_secret.ends_with("9876"));
    assert!(!rotated.api_secret.contains("rotated"));

    ecommerce_service::delete_integration(&state, &admin, created.id).await?;
    let listed = ecommerce_service::list_integrations(&state, &admin)
        .await?
        .data
        .expect("list");
    assert!(listed.items.is_empty());
    Ok(())
}
