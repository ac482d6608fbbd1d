use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::lookups::{AccessoryTypeList, LookupRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::AccessoryType,
    response::ApiResponse,
    services::accessory_type_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accessory_types).post(create_accessory_type))
        .route("/{id}", get(get_accessory_type).put(update_accessory_type).delete(delete_accessory_type))
}

#[utoipa::path(
    get,
    path = "/api/accessory-types",
    responses(
        (status = 200, description = "List accessory types", body = ApiResponse<AccessoryTypeList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn list_accessory_types(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<AccessoryTypeList>>> {
    let resp = accessory_type_service::list_accessory_types(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/accessory-types/{id}",
    params(
        ("id" = i32, Path, description = "Accessory type ID")
    ),
    responses(
        (status = 200, description = "Get accessory type", body = ApiResponse<AccessoryType>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn get_accessory_type(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<AccessoryType>>> {
    let resp = accessory_type_service::get_accessory_type(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/accessory-types",
    request_body = LookupRequest,
    responses(
        (status = 201, description = "Create accessory type", body = ApiResponse<AccessoryType>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn create_accessory_type(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<LookupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AccessoryType>>)> {
    let resp = accessory_type_service::create_accessory_type(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/accessory-types/{id}",
    params(
        ("id" = i32, Path, description = "Accessory type ID")
    ),
    request_body = LookupRequest,
    responses(
        (status = 200, description = "Update accessory type", body = ApiResponse<AccessoryType>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn update_accessory_type(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<LookupRequest>,
) -> AppResult<Json<ApiResponse<AccessoryType>>> {
    let resp = accessory_type_service::update_accessory_type(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/accessory-types/{id}",
    params(
        ("id" = i32, Path, description = "Accessory type ID")
    ),
    responses(
        (status = 200, description = "Delete accessory type", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Still referenced")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference Data"
)]
pub async fn delete_accessory_type(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = accessory_type_service::delete_accessory_type(&state, &user, id).await?;
    Ok(Json(resp))
}
