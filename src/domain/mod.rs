//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define contracts implemented by the infrastructure layer, and
//! the allocation logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
