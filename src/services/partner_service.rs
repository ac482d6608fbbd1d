use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use validator::Validate;

use crate::{
    audit,
    dto::partners::{PartnerList, PartnerRequest},
    entity::{Partners, partners},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Partner,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_partners(state: &AppState) -> AppResult<ApiResponse<PartnerList>> {
    let items: Vec<Partner> = Partners::find()
        .order_by_asc(partners::Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Partner::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Partners", PartnerList { items }, Some(meta)))
}

pub async fn get_partner(state: &AppState, id: i32) -> AppResult<ApiResponse<Partner>> {
    let partner = Partners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Partner", Partner::from(partner), None))
}

pub async fn create_partner(
    state: &AppState,
    user: &AuthUser,
    payload: PartnerRequest,
) -> AppResult<ApiResponse<Partner>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let partner = partners::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        logo_url: Set(payload.logo_url),
        logo_hint: Set(payload.logo_hint),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "partner_create",
        "partners",
        serde_json::json!({ "partner_id": partner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Partner created",
        Partner::from(partner),
        Some(Meta::empty()),
    ))
}

pub async fn update_partner(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: PartnerRequest,
) -> AppResult<ApiResponse<Partner>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let existing = Partners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: partners::ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.logo_url = Set(payload.logo_url);
    active.logo_hint = Set(payload.logo_hint);
    let partner = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "partner_update",
        "partners",
        serde_json::json!({ "partner_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Partner updated",
        Partner::from(partner),
        Some(Meta::empty()),
    ))
}

/// Pickups and inventory that pointed at the partner keep their rows with
/// the reference cleared.
pub async fn delete_partner(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = Partners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    existing.delete(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "partner_delete",
        "partners",
        serde_json::json!({ "partner_id": id }),
    )
    .await;

    Ok(ApiResponse::done("Partner deleted"))
}
