//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::short_url::compose_short_url;

/// Link service backed by the SQLite repository.
pub type SqliteLinkService = LinkService<SqliteLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SqliteLinkService>,
    /// Externally visible base address; `None` renders relative short URLs.
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    /// Builds the state over an existing pool.
    pub fn new(pool: Arc<SqlitePool>, base_url: Option<String>) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            base_url: base_url.map(Arc::from),
        }
    }

    /// Renders the short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        compose_short_url(self.base_url.as_deref(), code)
    }
}
