use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};

use crate::{
    dto::{
        ecommerce::{IntegrationList, IntegrationRequest, IntegrationUpdateRequest},
        logistics::RedistributedList,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{EcommerceIntegration, InventoryItem},
    response::ApiResponse,
    services::{ecommerce_service, logistics_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/redistributed", get(list_redistributed))
        .route("/inventory/{id}/recollection", post(request_recollection))
        .route("/inventory/{id}/recollected", post(mark_recollected))
        .route("/integrations", get(list_integrations).post(create_integration))
        .route(
            "/integrations/{id}",
            put(update_integration).delete(delete_integration),
        )
}

#[utoipa::path(
    get,
    path = "/api/logistics/redistributed",
    responses(
        (status = 200, description = "Redistributed items with their partner", body = ApiResponse<RedistributedList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn list_redistributed(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<RedistributedList>>> {
    let resp = logistics_service::list_redistributed(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/logistics/inventory/{id}/recollection",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Recollection requested", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Item is not delivered")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn request_recollection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = logistics_service::request_recollection(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/logistics/inventory/{id}/recollected",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Item recollected", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "No recollection was requested")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn mark_recollected(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = logistics_service::mark_recollected(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/logistics/integrations",
    responses(
        (status = 200, description = "E-commerce integrations with masked secrets", body = ApiResponse<IntegrationList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn list_integrations(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<IntegrationList>>> {
    let resp = ecommerce_service::list_integrations(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/logistics/integrations",
    request_body = IntegrationRequest,
    responses(
        (status = 201, description = "Create integration", body = ApiResponse<EcommerceIntegration>),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn create_integration(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<IntegrationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<EcommerceIntegration>>)> {
    let resp = ecommerce_service::create_integration(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/logistics/integrations/{id}",
    params(
        ("id" = i32, Path, description = "Integration ID")
    ),
    request_body = IntegrationUpdateRequest,
    responses(
        (status = 200, description = "Update integration", body = ApiResponse<EcommerceIntegration>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn update_integration(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<IntegrationUpdateRequest>,
) -> AppResult<Json<ApiResponse<EcommerceIntegration>>> {
    let resp = ecommerce_service::update_integration(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/logistics/integrations/{id}",
    params(
        ("id" = i32, Path, description = "Integration ID")
    ),
    responses(
        (status = 200, description = "Delete integration", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Logistics"
)]
pub async fn delete_integration(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = ecommerce_service::delete_integration(&state, &user, id).await?;
    Ok(Json(resp))
}
