use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch},
};

use crate::{
    dto::pickups::{
        PickupDateQuery, PickupDetailList, ScheduleOptions, ScheduledDays, SchedulePickupRequest,
        UpdatePickupStatusRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Pickup,
    response::ApiResponse,
    services::pickup_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_for_date).post(schedule_pickup))
        .route("/options", get(schedule_options))
        .route("/days", get(scheduled_days))
        .route("/{id}", delete(delete_pickup))
        .route("/{id}/status", patch(update_pickup_status))
}

#[utoipa::path(
    post,
    path = "/api/pickups",
    request_body = SchedulePickupRequest,
    responses(
        (status = 201, description = "Schedule a pickup; the message reports the confirmation email", body = ApiResponse<Pickup>),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Could not save the appointment")
    ),
    security(("bearer_auth" = [])),
    tag = "Pickups"
)]
pub async fn schedule_pickup(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SchedulePickupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Pickup>>)> {
    let resp = pickup_service::schedule_pickup(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/pickups/options",
    responses(
        (status = 200, description = "Choices for the scheduling form", body = ApiResponse<ScheduleOptions>)
    ),
    security(("bearer_auth" = [])),
    tag = "Pickups"
)]
pub async fn schedule_options(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<ScheduleOptions>>> {
    let resp = pickup_service::schedule_options(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/pickups/days",
    responses(
        (status = 200, description = "Dates that have pickups, ascending", body = ApiResponse<ScheduledDays>)
    ),
    security(("bearer_auth" = [])),
    tag = "Pickups"
)]
pub async fn scheduled_days(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<ScheduledDays>>> {
    let resp = pickup_service::scheduled_days(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/pickups",
    params(PickupDateQuery),
    responses(
        (status = 200, description = "Pickups on a date, ordered by time slot", body = ApiResponse<PickupDetailList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Pickups"
)]
pub async fn list_for_date(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<PickupDateQuery>,
) -> AppResult<Json<ApiResponse<PickupDetailList>>> {
    let resp = pickup_service::list_for_date(&state, &user, query.date).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/pickups/{id}/status",
    params(
        ("id" = i32, Path, description = "Pickup ID")
    ),
    request_body = UpdatePickupStatusRequest,
    responses(
        (status = 200, description = "Update pickup status", body = ApiResponse<Pickup>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Invalid status")
    ),
    security(("bearer_auth" = [])),
    tag = "Pickups"
)]
pub async fn update_pickup_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePickupStatusRequest>,
) -> AppResult<Json<ApiResponse<Pickup>>> {
    let resp = pickup_service::update_pickup_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/pickups/{id}",
    params(
        ("id" = i32, Path, description = "Pickup ID")
    ),
    responses(
        (status = 200, description = "Delete pickup", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Pickups"
)]
pub async fn delete_pickup(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = pickup_service::delete_pickup(&state, &user, id).await?;
    Ok(Json(resp))
}
