mod common;

use chrono::NaiveDate;
use toycycle_api::{
    dto::campaigns::CampaignRequest,
    error::AppError,
    services::campaign_service,
};

fn campaign(name: &str, end: Option<NaiveDate>) -> CampaignRequest {
    CampaignRequest {
        name: name.into(),
        description: Some("  ".into()),
        end_date: end,
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[tokio::test]
async fn campaign_crud_round() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let spring = campaign_service::create_campaign(
        &state,
        &admin,
        campaign(" Spring Toy Drive ", date(2026, 4, 30)),
    )
    .await?
    .data
    .expect("campaign");
    assert_eq!(spring.name, "Spring Toy Drive");
    assert!(spring.description.is_none());

    let holiday = campaign_service::create_campaign(
        &state,
        &admin,
        campaign("Holiday Giving", date(2026, 12, 24)),
    )
    .await?
    .data
    .expect("campaign");

    let fetched = campaign_service::get_campaign(&state, &admin, spring.id)
        .await?
        .data
        .expect("campaign");
    assert_eq!(fetched.end_date, date(2026, 4, 30).expect("date"));

    let listed = campaign_service::list_campaigns(&state, &admin).await?;
    assert_eq!(listed.meta.expect("meta").total, Some(2));
    let ids: Vec<i32> = listed.data.expect("list").items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![holiday.id, spring.id]);

    let updated = campaign_service::update_campaign(
        &state,
        &admin,
        spring.id,
        CampaignRequest {
            name: "Spring Toy Drive".into(),
            description: Some("Extended a month".into()),
            end_date: date(2027, 1, 15),
        },
    )
    .await?
    .data
    .expect("campaign");
    assert_eq!(updated.description.as_deref(), Some("Extended a month"));

    let listed = campaign_service::list_campaigns(&state, &admin)
        .await?
        .data
        .expect("list");
    assert_eq!(listed.items[0].id, spring.id);

    campaign_service::delete_campaign(&state, &admin, spring.id).await?;
    let gone = campaign_service::get_campaign(&state, &admin, spring.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    let again = campaign_service::delete_campaign(&state, &admin, spring.id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn campaign_requires_end_date() -> anyhow::Result<()> {
    let (state, admin) = common::setup_state().await?;

    let result = campaign_service::create_campaign(&state, &admin, campaign("Open ended", None)).await;
    match result {
        Err(AppError::Validation(fields)) => assert!(fields.contains_key("end_date")),
        other => panic!("unexpected result {other:?}"),
    }

    let missing = campaign_service::update_campaign(
        &state,
        &admin,
        9_999,
        campaign("Ghost", date(2026, 6, 1)),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn campaigns_are_admin_only() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let listed = campaign_service::list_campaigns(&state, &donor).await;
    assert!(matches!(listed, Err(AppError::Forbidden)));

    let created = campaign_service::create_campaign(
        &state,
        &donor,
        campaign("Sneaky drive", date(2026, 8, 1)),
    )
    .await;
    assert!(matches!(created, Err(AppError::Forbidden)));
    Ok(())
}
