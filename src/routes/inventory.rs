use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::inventory::{InventoryList, InventoryQuery, InventoryRequest, StatusCount},
    error::AppResult,
    middleware::auth::AuthUser,
    models::InventoryItem,
    response::ApiResponse,
    services::inventory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory).post(create_inventory_item))
        .route("/counts", get(inventory_counts))
        .route(
            "/{id}",
            get(get_inventory_item)
                .put(update_inventory_item)
                .delete(delete_inventory_item),
        )
}

#[utoipa::path(
    get,
    path = "/api/inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "List inventory, newest first", body = ApiResponse<InventoryList>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Unknown status filter")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn list_inventory(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<ApiResponse<InventoryList>>> {
    let resp = inventory_service::list_inventory(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/inventory/counts",
    responses(
        (status = 200, description = "Item count per status", body = ApiResponse<Vec<StatusCount>>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn inventory_counts(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<StatusCount>>>> {
    let resp = inventory_service::inventory_counts(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Get inventory item", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn get_inventory_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = inventory_service::get_inventory_item(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = InventoryRequest,
    responses(
        (status = 201, description = "Create inventory item", body = ApiResponse<InventoryItem>),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<InventoryRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<InventoryItem>>)> {
    let resp = inventory_service::create_inventory_item(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = InventoryRequest,
    responses(
        (status = 200, description = "Update inventory item", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn update_inventory_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<InventoryRequest>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let resp = inventory_service::update_inventory_item(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Delete inventory item", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Inventory"
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = inventory_service::delete_inventory_item(&state, &user, id).await?;
    Ok(Json(resp))
}
