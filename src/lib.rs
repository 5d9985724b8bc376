//! # Boto URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The short link entity and repository traits
//! - **Application Layer** ([`application`]) - Code allocation and link lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Code allocation
//!
//! Generated codes are 8 characters drawn from `[A-Za-z0-9]` using the OS
//! random source. The database's `UNIQUE` constraint decides collisions; a
//! colliding candidate is discarded and a new one drawn, up to 5 times.
//! Custom codes get exactly one insert attempt and fail with a conflict if taken.
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_DB_PATH="data/shortener.db"
//! export BASE_URL="http://localhost:8000"   # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{NewShortLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
