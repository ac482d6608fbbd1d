use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use validator::Validate;

use crate::{
    audit,
    dto::lookups::{LookupRequest, ToyConditionList},
    entity::{Inventory, Pickups, ToyConditions, inventory, pickups, toy_conditions},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::ToyCondition,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_toy_conditions(state: &AppState) -> AppResult<ApiResponse<ToyConditionList>> {
    let items: Vec<ToyCondition> = ToyConditions::find()
        .order_by_asc(toy_conditions::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ToyCondition::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Toy conditions", ToyConditionList { items }, Some(meta)))
}

pub async fn get_toy_condition(state: &AppState, id: i32) -> AppResult<ApiResponse<ToyCondition>> {
    let row = ToyConditions::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Toy condition", ToyCondition::from(row), None))
}

pub async fn create_toy_condition(
    state: &AppState,
    user: &AuthUser,
    payload: LookupRequest,
) -> AppResult<ApiResponse<ToyCondition>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let row = toy_conditions::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "toy_condition_create",
        "toy_conditions",
        serde_json::json!({ "id": row.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Toy condition created",
        ToyCondition::from(row),
        Some(Meta::empty()),
    ))
}

pub async fn update_toy_condition(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: LookupRequest,
) -> AppResult<ApiResponse<ToyCondition>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let existing = ToyConditions::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: toy_conditions::ActiveModel = existing.into();
    active.name = Set(payload.name);
    let row = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "toy_condition_update",
        "toy_conditions",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Toy condition updated",
        ToyCondition::from(row),
        Some(Meta::empty()),
    ))
}

/// Fails with a conflict while inventory or pickups still use the condition.
pub async fn delete_toy_condition(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let items = Inventory::find()
        .filter(inventory::Column::ConditionId.eq(id))
        .count(&state.orm)
        .await?;
    let bookings = Pickups::find()
        .filter(pickups::Column::ToyConditionId.eq(id))
        .count(&state.orm)
        .await?;
    if items + bookings > 0 {
        return Err(AppError::Conflict(
            "Toy condition is still used by inventory or pickups".into(),
        ));
    }

    let result = ToyConditions::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user.user_id,
        "toy_condition_delete",
        "toy_conditions",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::done("Toy condition deleted"))
}
