use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use validator::Validate;

use crate::{
    audit,
    dto::ecommerce::{IntegrationList, IntegrationRequest, IntegrationUpdateRequest},
    entity::{EcommerceIntegrations, ecommerce_integrations},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::EcommerceIntegration,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_integrations(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<IntegrationList>> {
    ensure_admin(user)?;
    let items: Vec<EcommerceIntegration> = EcommerceIntegrations::find()
        .order_by_desc(ecommerce_integrations::Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(EcommerceIntegration::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "E-commerce integrations",
        IntegrationList { items },
        Some(meta),
    ))
}

pub async fn create_integration(
    state: &AppState,
    user: &AuthUser,
    payload: IntegrationRequest,
) -> AppResult<ApiResponse<EcommerceIntegration>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let integration = ecommerce_integrations::ActiveModel {
        id: NotSet,
        platform: Set(payload.platform),
        api_key: Set(payload.api_key),
        api_secret: Set(payload.api_secret),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    // The secret itself never goes into the audit trail.
    audit::record(
        &state.orm,
        user.user_id,
        "integration_create",
        "ecommerce_integrations",
        serde_json::json!({ "integration_id": integration.id, "platform": integration.platform }),
    )
    .await;

    Ok(ApiResponse::success(
        "Integration created",
        EcommerceIntegration::from(integration),
        Some(Meta::empty()),
    ))
}

pub async fn update_integration(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: IntegrationUpdateRequest,
) -> AppResult<ApiResponse<EcommerceIntegration>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let existing = EcommerceIntegrations::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let rotated = payload.api_secret.is_some();
    let mut active: ecommerce_integrations::ActiveModel = existing.into();
    active.platform = Set(payload.platform);
    active.api_key = Set(payload.api_key);
    if let Some(secret) = payload.api_secret {
        active.api_secret = Set(secret);
    }
    let integration = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "integration_update",
        "ecommerce_integrations",
        serde_json::json!({ "integration_id": id, "secret_rotated": rotated }),
    )
    .await;

    Ok(ApiResponse::success(
        "Integration updated",
        EcommerceIntegration::from(integration),
        Some(Meta::empty()),
    ))
}

pub async fn delete_integration(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = EcommerceIntegrations::delete_by_id(id)
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user.user_id,
        "integration_delete",
        "ecommerce_integrations",
        serde_json::json!({ "integration_id": id }),
    )
    .await;

    Ok(ApiResponse::done("Integration deleted"))
}
