use axum::{extract::FromRequestParts, http::header};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{dto::auth::Claims, error::AppError, models::Role, state::AppState};

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin.as_str()
    }
}

pub fn ensure_role(user: &AuthUser, role: Role) -> Result<(), AppError> {
    if user.role != role.as_str() {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_admin(user: &AuthUser) -> Result<(), AppError> {
    ensure_role(user, Role::Admin)
}

pub fn decode_session(token: &str, secret: &str) -> Result<AuthUser, AppError> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;

    let user_id = Uuid::parse_str(&decoded.claims.sub).map_err(|_| AppError::Unauthorized)?;

    Ok(AuthUser {
        user_id,
        email: decoded.claims.email,
        name: decoded.claims.name,
        role: decoded.claims.role,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Bearer header wins over the cookie so API clients can override a browser session.
        let bearer = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => {
                let auth_str = value
                    .to_str()
                    .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;
                if !auth_str.starts_with("Bearer ") {
                    return Err(AppError::BadRequest("Invalid Authorization scheme".into()));
                }
                Some(auth_str.trim_start_matches("Bearer ").trim().to_string())
            }
            None => None,
        };

        let token = match bearer {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_string())
                .ok_or(AppError::Unauthorized)?,
        };

        decode_session(&token, &state.config.jwt_secret)
    }
}
