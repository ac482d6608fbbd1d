use axum::extract::State;
use toycycle_api::{
    config::AppConfig, db::create_mock_conn, routes::health::health_check, state::AppState,
};

#[tokio::test]
async fn health_check_returns_ok() {
    let conn = create_mock_conn().await.expect("mock db");
    let state = AppState::new(conn, AppConfig::local()).expect("state");

    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.data_source, "mock");
}
