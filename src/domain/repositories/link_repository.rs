//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short link mappings.
///
/// Every write is atomic with respect to a single row: it either commits fully
/// or leaves no trace. Code uniqueness is enforced by the storage engine, not by
/// callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link under the uniqueness constraint on `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Replaces the destination URL of an existing link.
    ///
    /// Returns `Ok(true)` if a row was updated, `Ok(false)` if the code does not exist.
    async fn update_url(&self, code: &str, original_url: &str) -> Result<bool, AppError>;

    /// Removes a link.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the code does not exist.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists links, newest first.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Verifies the storage backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
