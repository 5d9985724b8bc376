#![allow(dead_code)]

use axum_test::TestServer;
use boto_shortener::infrastructure::persistence::{self, MIGRATOR, PoolSettings};
use boto_shortener::routes;
use boto_shortener::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

/// Opens a fresh in-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

/// Opens a file-backed database with the default pool settings, so concurrent
/// writers use separate connections.
///
/// The returned [`TempDir`] owns the database file and must outlive the pool.
pub async fn file_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("links.db").display());

    let pool = persistence::connect(&url, &PoolSettings::default())
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    (dir, pool)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (code, original_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn stored_url(pool: &SqlitePool, code: &str) -> Option<String> {
    sqlx::query_scalar("SELECT original_url FROM urls WHERE code = ?1")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool, base_url: Option<&str>) -> AppState {
    AppState::new(Arc::new(pool), base_url.map(str::to_string))
}

/// Test server over the full router (without trailing-slash normalization).
pub fn test_server(pool: SqlitePool, base_url: Option<&str>) -> TestServer {
    let state = create_test_state(pool, base_url);
    TestServer::new(routes::router(state)).unwrap()
}
