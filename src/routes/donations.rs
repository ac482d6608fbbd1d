use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::donations::{DonationList, RecordDonationRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Donation,
    response::ApiResponse,
    services::donation_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_my_donations).post(record_donation))
}

#[utoipa::path(
    get,
    path = "/api/donations",
    responses(
        (status = 200, description = "The caller's donations, newest first", body = ApiResponse<DonationList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
pub async fn list_my_donations(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<DonationList>>> {
    let resp = donation_service::list_my_donations(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = RecordDonationRequest,
    responses(
        (status = 201, description = "Record a donation", body = ApiResponse<Donation>),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Item already has a donation"),
        (status = 422, description = "Unknown user or item")
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
pub async fn record_donation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<RecordDonationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Donation>>)> {
    let resp = donation_service::record_donation(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
