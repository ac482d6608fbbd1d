use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::campaigns::{CampaignList, CampaignRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Campaign,
    response::ApiResponse,
    services::campaign_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_campaigns).post(create_campaign))
        .route(
            "/{id}",
            get(get_campaign).put(update_campaign).delete(delete_campaign),
        )
}

#[utoipa::path(
    get,
    path = "/api/campaigns",
    responses(
        (status = 200, description = "Campaigns, latest end date first", body = ApiResponse<CampaignList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Campaigns"
)]
pub async fn list_campaigns(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CampaignList>>> {
    let resp = campaign_service::list_campaigns(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    params(
        ("id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Get campaign", body = ApiResponse<Campaign>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Campaigns"
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Campaign>>> {
    let resp = campaign_service::get_campaign(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/campaigns",
    request_body = CampaignRequest,
    responses(
        (status = 201, description = "Create campaign", body = ApiResponse<Campaign>),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Campaigns"
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CampaignRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Campaign>>)> {
    let resp = campaign_service::create_campaign(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/campaigns/{id}",
    params(
        ("id" = i32, Path, description = "Campaign ID")
    ),
    request_body = CampaignRequest,
    responses(
        (status = 200, description = "Update campaign", body = ApiResponse<Campaign>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Campaigns"
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CampaignRequest>,
) -> AppResult<Json<ApiResponse<Campaign>>> {
    let resp = campaign_service::update_campaign(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/campaigns/{id}",
    params(
        ("id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Delete campaign", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Campaigns"
)]
pub async fn delete_campaign(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = campaign_service::delete_campaign(&state, &user, id).await?;
    Ok(Json(resp))
}
