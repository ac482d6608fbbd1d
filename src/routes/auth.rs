use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest},
    error::AppResult,
    middleware::auth::{AuthUser, SESSION_COOKIE},
    models::User,
    response::{ApiResponse, Meta},
    services::auth_service::{current_user, login_user, register_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Register user", body = ApiResponse<User>),
        (status = 409, description = "Email already taken"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let resp = register_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user, also sets the session cookie", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let resp = login_user(&state, payload).await?;
    let cookie = Cookie::build((SESSION_COOKIE, resp.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    Ok((
        jar.add(cookie),
        Json(ApiResponse::success("Logged in", resp, Some(Meta::empty()))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Clear the session cookie", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Auth"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<serde_json::Value>>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(ApiResponse::done("Logged out")))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<User>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = current_user(&state, &user).await?;
    Ok(Json(resp))
}
