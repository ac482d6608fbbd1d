use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use validator::Validate;

use crate::{
    audit,
    dto::lookups::{LookupRequest, AccessoryTypeList},
    entity::{AccessoryTypes, Pickups, accessory_types, pickups},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::AccessoryType,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_accessory_types(state: &AppState) -> AppResult<ApiResponse<AccessoryTypeList>> {
    let items: Vec<AccessoryType> = AccessoryTypes::find()
        .order_by_asc(accessory_types::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(AccessoryType::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Accessory types", AccessoryTypeList { items }, Some(meta)))
}

pub async fn get_accessory_type(state: &AppState, id: i32) -> AppResult<ApiResponse<AccessoryType>> {
    let row = AccessoryTypes::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Accessory type", AccessoryType::from(row), None))
}

pub async fn create_accessory_type(
    state: &AppState,
    user: &AuthUser,
    payload: LookupRequest,
) -> AppResult<ApiResponse<AccessoryType>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let row = accessory_types::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "accessory_type_create",
        "accessory_types",
        serde_json::json!({ "id": row.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Accessory type created",
        AccessoryType::from(row),
        Some(Meta::empty()),
    ))
}

pub async fn update_accessory_type(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: LookupRequest,
) -> AppResult<ApiResponse<AccessoryType>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let existing = AccessoryTypes::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: accessory_types::ActiveModel = existing.into();
    active.name = Set(payload.name);
    let row = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "accessory_type_update",
        "accessory_types",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Accessory type updated",
        AccessoryType::from(row),
        Some(Meta::empty()),
    ))
}

/// Fails with a conflict while pickups still reference the type.
pub async fn delete_accessory_type(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let in_use = Pickups::find()
        .filter(pickups::Column::AccessoryTypeId.eq(id))
        .count(&state.orm)
        .await?;
    if in_use > 0 {
        return Err(AppError::Conflict(
            "Accessory type is still used by scheduled pickups".into(),
        ));
    }

    let result = AccessoryTypes::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user.user_id,
        "accessory_type_delete",
        "accessory_types",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::done("Accessory type deleted"))
}
