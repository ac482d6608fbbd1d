#![allow(dead_code)]

use toycycle_api::{
    config::AppConfig,
    db::create_mock_conn,
    dto::auth::RegisterRequest,
    middleware::auth::AuthUser,
    models::Role,
    seed::{MOCK_ADMIN_PASSWORD, seed_admin},
    services::auth_service,
    state::AppState,
};

/// Fresh seeded in-memory database with the admin account in place.
pub async fn setup_state() -> anyhow::Result<(AppState, AuthUser)> {
    let config = AppConfig::local();
    let conn = create_mock_conn().await?;
    let admin_id = seed_admin(&conn, &config.admin_email, MOCK_ADMIN_PASSWORD).await?;
    let admin = AuthUser {
        user_id: admin_id,
        email: config.admin_email.clone(),
        name: "Admin".into(),
        role: Role::Admin.as_str().into(),
    };
    let state = AppState::new(conn, config)?;
    Ok((state, admin))
}

/// Register a regular account and return it as an authenticated caller.
pub async fn register_donor(state: &AppState, name: &str, email: &str) -> anyhow::Result<AuthUser> {
    let resp = auth_service::register_user(
        state,
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: "password123".into(),
        },
    )
    .await?;
    let user = resp.data.ok_or_else(|| anyhow::anyhow!("missing user"))?;
    Ok(AuthUser {
        user_id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    })
}
