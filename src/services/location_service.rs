use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use validator::Validate;

use crate::{
    audit,
    dto::locations::{LocationList, LocationRequest},
    entity::{Locations, locations},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Location,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_locations(state: &AppState) -> AppResult<ApiResponse<LocationList>> {
    let items: Vec<Location> = Locations::find()
        .order_by_asc(locations::Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Location::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Locations", LocationList { items }, Some(meta)))
}

pub async fn get_location(state: &AppState, id: i32) -> AppResult<ApiResponse<Location>> {
    let location = Locations::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Location", Location::from(location), None))
}

pub async fn create_location(
    state: &AppState,
    user: &AuthUser,
    payload: LocationRequest,
) -> AppResult<ApiResponse<Location>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let location = locations::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        address: Set(payload.address),
        hours: Set(payload.hours),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.user_id,
        "location_create",
        "locations",
        serde_json::json!({ "location_id": location.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Location created",
        Location::from(location),
        Some(Meta::empty()),
    ))
}

pub async fn update_location(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: LocationRequest,
) -> AppResult<ApiResponse<Location>> {
    ensure_admin(user)?;
    let payload = payload.normalize();
    payload.validate()?;

    let existing = Locations::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: locations::ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.address = Set(payload.address);
    active.hours = Set(payload.hours);
    let location = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        user.user_id,
        "location_update",
        "locations",
        serde_json::json!({ "location_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Location updated",
        Location::from(location),
        Some(Meta::empty()),
    ))
}

pub async fn delete_location(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Locations::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        user.user_id,
        "location_delete",
        "locations",
        serde_json::json!({ "location_id": id }),
    )
    .await;

    Ok(ApiResponse::done("Location deleted"))
}
