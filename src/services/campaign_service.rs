use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use validator::Validate;

use crate::{
    audit,
    dto::campaigns::{CampaignList, CampaignRequest},
    entity::{Campaigns, campaigns},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Campaign,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_campaigns(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<CampaignList>> {
    ensure_admin(user)?;
    let items: Vec<Campaign> = Campaigns::find()
        .order_by_desc(campaigns::Column::EndDate)
        .order_by_desc(campaigns::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Campaign::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Campaigns", CampaignList { items }, Some(meta)))
}

pub async fn get_campaign(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Campaign>> {
    ensure_admin(user)?;
    let campaign = Campaigns::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Campaign", Campaign::from(campaign), None))
}

pub async fn create_campaign(
    state: &AppState,
    user: &AuthUser,
    payload: CampaignRequest,
) -> AppResult<ApiResponse<Campaign>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;
    let end_date = payload
        .end_date
        .ok_or_else(|| AppError::field("end_date", "An end date is required."))?;

    let campaign = campaigns::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        end_date: Set(end_date),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "campaign_create",
        "campaigns",
        serde_json::json!({ "campaign_id": campaign.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Campaign created",
        Campaign::from(campaign),
        Some(Meta::empty()),
    ))
}

pub async fn update_campaign(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: CampaignRequest,
) -> AppResult<ApiResponse<Campaign>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;
    let end_date = payload
        .end_date
        .ok_or_else(|| AppError::field("end_date", "An end date is required."))?;

    let existing = Campaigns::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: campaigns::ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.end_date = Set(end_date);
    let campaign = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "campaign_update",
        "campaigns",
        serde_json::json!({ "campaign_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Campaign updated",
        Campaign::from(campaign),
        Some(Meta::empty()),
    ))
}

pub async fn delete_campaign(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Campaigns::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user.user_id,
        "campaign_delete",
        "campaigns",
        serde_json::json!({ "campaign_id": id }),
    )
    .await;

    Ok(ApiResponse::done("Campaign deleted"))
}
