mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use std::collections::HashSet;

#[tokio::test]
async fn test_shorten_generates_code() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), Some("https://s.example.com"));

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["short_url"], format!("https://s.example.com/{}", code));
    assert_eq!(
        common::stored_url(&pool, code).await.as_deref(),
        Some("https://example.com/some/long/path")
    );
}

#[tokio::test]
async fn test_shorten_without_base_url_is_relative() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool, None);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert_eq!(body["short_url"], format!("/{}", code));
}

#[tokio::test]
async fn test_shorten_trims_trailing_slash_of_base_url() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool, Some("https://s.example.com/"));

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "code": "promo" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["short_url"], "https://s.example.com/promo");
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), None);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/docs", "code": "my-docs" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], "my-docs");
    assert_eq!(body["short_url"], "/my-docs");
    assert_eq!(
        common::stored_url(&pool, "my-docs").await.as_deref(),
        Some("https://example.com/docs")
    );
}

#[tokio::test]
async fn test_shorten_custom_code_conflict_keeps_first() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), None);

    server
        .post("/shorten")
        .json(&json!({ "url": "https://first.com", "code": "taken" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://second.com", "code": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["code"], "taken");

    assert_eq!(common::count_links(&pool).await, 1);
    assert_eq!(
        common::stored_url(&pool, "taken").await.as_deref(),
        Some("https://first.com")
    );
}

#[tokio::test]
async fn test_shorten_same_url_gets_independent_codes() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), None);

    let mut codes = HashSet::new();
    for _ in 0..3 {
        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://same.example.com" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        codes.insert(body["code"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 3);
    assert_eq!(common::count_links(&pool).await, 3);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), None);

    for url in ["not-a-url", "ftp://example.com/file", "javascript:alert(1)", ""] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_shorten_invalid_custom_code() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone(), None);

    for code in ["", "has space", "a/b", "health", "shorten"] {
        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://example.com", "code": code }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let too_long = "a".repeat(65);
    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "code": too_long }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool, None);

    let response = server.post("/shorten").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}
