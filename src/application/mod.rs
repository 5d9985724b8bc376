//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short code allocation and link lifecycle

pub mod services;
