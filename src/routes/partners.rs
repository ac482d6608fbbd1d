use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::partners::{PartnerList, PartnerRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Partner,
    response::ApiResponse,
    services::partner_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_partners).post(create_partner))
        .route("/{id}", get(get_partner).put(update_partner).delete(delete_partner))
}

#[utoipa::path(
    get,
    path = "/api/partners",
    responses(
        (status = 200, description = "List partners", body = ApiResponse<PartnerList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
pub async fn list_partners(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<PartnerList>>> {
    let resp = partner_service::list_partners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/partners/{id}",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Get partner", body = ApiResponse<Partner>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
pub async fn get_partner(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Partner>>> {
    let resp = partner_service::get_partner(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/partners",
    request_body = PartnerRequest,
    responses(
        (status = 201, description = "Create partner", body = ApiResponse<Partner>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
pub async fn create_partner(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<PartnerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Partner>>)> {
    let resp = partner_service::create_partner(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/partners/{id}",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    request_body = PartnerRequest,
    responses(
        (status = 200, description = "Update partner", body = ApiResponse<Partner>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
pub async fn update_partner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PartnerRequest>,
) -> AppResult<Json<ApiResponse<Partner>>> {
    let resp = partner_service::update_partner(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/partners/{id}",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Delete partner", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
pub async fn delete_partner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = partner_service::delete_partner(&state, &user, id).await?;
    Ok(Json(resp))
}
