use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::lookups::{ToyConditionList, LookupRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::ToyCondition,
    response::ApiResponse,
    services::toy_condition_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_toy_conditions).post(create_toy_condition))
        .route("/{id}", get(get_toy_condition).put(update_toy_condition).delete(delete_toy_condition))
}

#[utoipa::path(
    get,
    path = "/api/toy-conditions",
    responses(
        (status = 200, description = "List toy conditions", body = ApiResponse<ToyConditionList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn list_toy_conditions(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<ToyConditionList>>> {
    let resp = toy_condition_service::list_toy_conditions(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/toy-conditions/{id}",
    params(
        ("id" = i32, Path, description = "Toy condition ID")
    ),
    responses(
        (status = 200, description = "Get toy condition", body = ApiResponse<ToyCondition>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn get_toy_condition(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ToyCondition>>> {
    let resp = toy_condition_service::get_toy_condition(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/toy-conditions",
    request_body = LookupRequest,
    responses(
        (status = 201, description = "Create toy condition", body = ApiResponse<ToyCondition>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn create_toy_condition(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<LookupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ToyCondition>>)> {
    let resp = toy_condition_service::create_toy_condition(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/toy-conditions/{id}",
    params(
        ("id" = i32, Path, description = "Toy condition ID")
    ),
    request_body = LookupRequest,
    responses(
        (status = 200, description = "Update toy condition", body = ApiResponse<ToyCondition>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn update_toy_condition(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<LookupRequest>,
) -> AppResult<Json<ApiResponse<ToyCondition>>> {
    let resp = toy_condition_service::update_toy_condition(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/toy-conditions/{id}",
    params(
        ("id" = i32, Path, description = "Toy condition ID")
    ),
    responses(
        (status = 200, description = "Delete toy condition", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Still referenced")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn delete_toy_condition(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = toy_condition_service::delete_toy_condition(&state, &user, id).await?;
    Ok(Json(resp))
}
