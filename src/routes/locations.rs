use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::locations::{LocationList, LocationRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Location,
    response::ApiResponse,
    services::location_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route("/{id}", get(get_location).put(update_location).delete(delete_location))
}

#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "List locations", body = ApiResponse<LocationList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Locations"
)]
pub async fn list_locations(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<LocationList>>> {
    let resp = location_service::list_locations(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Get location", body = ApiResponse<Location>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Locations"
)]
pub async fn get_location(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Location>>> {
    let resp = location_service::get_location(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = LocationRequest,
    responses(
        (status = 201, description = "Create location", body = ApiResponse<Location>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Locations"
)]
pub async fn create_location(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<LocationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Location>>)> {
    let resp = location_service::create_location(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    request_body = LocationRequest,
    responses(
        (status = 200, description = "Update location", body = ApiResponse<Location>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Locations"
)]
pub async fn update_location(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<LocationRequest>,
) -> AppResult<Json<ApiResponse<Location>>> {
    let resp = location_service::update_location(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Delete location", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Locations"
)]
pub async fn delete_location(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = location_service::delete_location(&state, &user, id).await?;
    Ok(Json(resp))
}
