//! Short link entity representing a code → URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// `code` is unique among existing links and never changes once assigned.
/// `original_url` can be replaced by an update; `created_at` is fixed at insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a new short link.
///
/// The creation timestamp is assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
}

impl NewShortLink {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }
}
