//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Every write
//! runs in its own transaction; the `UNIQUE` constraint on `urls.code` is the
//! only uniqueness authority.
//!
//! - [`SqliteLinkRepository`] - Short link storage and retrieval
//! - [`pool`] - Connection pool setup and embedded migrations

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{MIGRATOR, PoolSettings, connect};
pub use sqlite_link_repository::SqliteLinkRepository;
