use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::chat::{ChatReply, ChatRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::assistant_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(chat))
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ApiResponse<ChatReply>),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Empty message")
    ),
    security(("bearer_auth" = [])),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    let resp = assistant_service::chat(&state, &user, payload).await?;
    Ok(Json(resp))
}
