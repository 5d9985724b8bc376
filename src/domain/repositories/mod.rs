//! Repository trait definitions for the domain layer.
//!
//! Traits abstract the storage capability ("durable unique-keyed table") so the
//! allocation logic never depends on a concrete engine.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! See integration tests in `tests/repository_link.rs` for usage examples.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
