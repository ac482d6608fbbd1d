mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use toycycle_api::app::build_router;
use tower::ServiceExt;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn register_login_and_session_cookie() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/register",
            json!({ "name": "Dana Donor", "email": "Dana@Example.com", "password": "password123" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let duplicate = app
        .clone()
        .oneshot(post_json(
            "/api/auth/register",
            json!({ "name": "Dana Again", "email": "dana@example.com", "password": "password123" }),
        ))
        .await?;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "dana@example.com", "password": "password123" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
        .expect("session cookie");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    let body = body_json(response).await?;
    assert_eq!(body["data"]["user"]["email"], "dana@example.com");

    let session = cookie.split(';').next().expect("pair").to_string();
    let me = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, session)
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(me.status(), StatusCode::OK);
    let body = body_json(me).await?;
    assert_eq!(body["data"]["name"], "Dana Donor");
    Ok(())
}

#[tokio::test]
async fn protected_routes_need_a_session() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/auth/me").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/inventory")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn bad_login_and_unknown_paths() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "nobody@example.com", "password": "password123" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(Request::builder().uri("/nowhere").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await?;
    assert_eq!(body["data"]["path"], "/nowhere");
    Ok(())
}
