//! Short link allocation and mapping service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{info, warn};

/// Number of generated candidates tried before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Service owning short link creation, resolution, update and deletion.
///
/// Uniqueness is decided solely by the repository's constrained insert. The
/// service never checks for an existing code before inserting, so two
/// concurrent writers cannot both observe a free code and both succeed.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link with a generated code.
    ///
    /// Generates a candidate and attempts a constrained insert, up to
    /// [`MAX_CODE_ATTEMPTS`] times. The first successful insert wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExhaustedRetries`] if every candidate collided.
    /// Returns [`AppError::Internal`] on database errors, without retrying.
    pub async fn create_auto(&self, original_url: &str) -> Result<ShortLink, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();

            match self
                .link_repository
                .insert(NewShortLink::new(code.as_str(), original_url))
                .await
            {
                Ok(link) => {
                    info!(code = %link.code, url = %link.original_url, "Short link created");
                    return Ok(link);
                }
                Err(e) if e.is_conflict() => {
                    warn!(code = %code, attempt, "Generated code collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Creates a short link with a caller-supplied code.
    ///
    /// Attempts exactly one insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_custom(&self, original_url: &str, code: &str) -> Result<ShortLink, AppError> {
        match self
            .link_repository
            .insert(NewShortLink::new(code, original_url))
            .await
        {
            Ok(link) => {
                info!(code = %link.code, url = %link.original_url, "Short link created with custom code");
                Ok(link)
            }
            Err(e) if e.is_conflict() => {
                warn!(code = %code, "Custom code already in use");
                Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": code }),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a code to its destination URL.
    ///
    /// Returns `Ok(None)` when no link with this code exists.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let url = self
            .link_repository
            .find_by_code(code)
            .await?
            .map(|link| link.original_url);

        match &url {
            Some(url) => info!(code = %code, url = %url, "Short link resolved"),
            None => info!(code = %code, "Short link not found"),
        }

        Ok(url)
    }

    /// Replaces the destination of an existing link.
    ///
    /// Returns `Ok(false)` if the code does not exist; nothing is created.
    pub async fn update(&self, code: &str, new_url: &str) -> Result<bool, AppError> {
        let updated = self.link_repository.update_url(code, new_url).await?;

        if updated {
            info!(code = %code, url = %new_url, "Short link updated");
        }

        Ok(updated)
    }

    /// Deletes a link.
    ///
    /// Returns `Ok(false)` if the code does not exist.
    pub async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let deleted = self.link_repository.delete(code).await?;

        if deleted {
            info!(code = %code, "Short link deleted");
        }

        Ok(deleted)
    }

    /// Returns the full link record for a code.
    pub async fn find(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        self.link_repository.find_by_code(code).await
    }

    /// Lists links, newest first.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortLink>, AppError> {
        self.link_repository.list(limit, offset).await
    }

    /// Counts all links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Checks storage connectivity.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
