//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (database connectivity)
//! - `POST /shorten` - Create a short link
//! - `/{code}`       - Redirect, update and delete by code
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing as request_tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Fixed routes (`/health`, `/shorten`) take precedence over `/{code}`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(request_tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
