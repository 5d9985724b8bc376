mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_healthy() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "h1", "https://example.com").await;

    let server = common::test_server(pool, None);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["database"]["message"], "Connected, links: 1");
}

#[tokio::test]
async fn test_health_degraded_when_pool_closed() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), None);

    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
