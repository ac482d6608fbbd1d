use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::dashboard::{DashboardStats, ImpactReport, LocationDonationList},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/donations-by-location", get(donations_by_location))
        .route("/impact-report", get(impact_report))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Headline totals", body = ApiResponse<DashboardStats>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let resp = dashboard_service::stats(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/donations-by-location",
    responses(
        (status = 200, description = "Pickup count per drop-off location", body = ApiResponse<LocationDonationList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn donations_by_location(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<LocationDonationList>>> {
    let resp = dashboard_service::donations_by_location(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/impact-report",
    responses(
        (status = 200, description = "Personalized impact report", body = ApiResponse<ImpactReport>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn impact_report(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ImpactReport>>> {
    let resp = dashboard_service::impact_report(&state, &user).await?;
    Ok(Json(resp))
}
