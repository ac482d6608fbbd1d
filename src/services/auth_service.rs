use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    entity::{Users, users},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Role, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Sign a session token for `user` valid for `ttl_hours`.
pub fn issue_token(user: &users::Model, secret: &str, ttl_hours: i64) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let RegisterRequest {
        name,
        email,
        password,
    } = payload;
    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();

    if email.eq_ignore_ascii_case(&state.config.admin_email) {
        return Err(AppError::field("email", "This email address is reserved."));
    }

    let exist = Users::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::Conflict("Email is already taken".to_string()));
    }

    let password_hash =
        hash_password(&password).map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        avatar: Set(Some(format!("https://i.pravatar.cc/150?u={email}"))),
        email: Set(email),
        password_hash: Set(password_hash),
        role: Set(Role::User.as_str().to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        user.id,
        "user_register",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "User created",
        User::from(user),
        Some(Meta::empty()),
    ))
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    payload.validate()?;
    let LoginRequest { email, password } = payload;
    let email = email.trim().to_lowercase();

    let user = Users::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let token = issue_token(
        &user,
        &state.config.jwt_secret,
        state.config.session_ttl_hours,
    )?;

    audit::record(
        &state.orm,
        user.id,
        "user_login",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(LoginResponse {
        token,
        user: User::from(user),
    })
}

pub async fn current_user(state: &AppState, auth: &AuthUser) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(auth.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(ApiResponse::success("Current user", User::from(user), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }
}
