//! Destination URL validation.
//!
//! Short links only ever point at absolute HTTP or HTTPS URLs. The URL is stored
//! exactly as submitted; validation never rewrites it.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Upper bound on destination URL length.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("URL must not contain whitespace or control characters")]
    IllegalCharacters,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] that applies.
pub fn check_http_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    // Stored verbatim and later sent back as a `Location` header.
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::IllegalCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

/// [`validator`] adapter for [`check_http_url`].
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    check_http_url(input).map(|_| ()).map_err(|e| {
        ValidationError::new("url").with_message(Cow::Owned(e.to_string()))
    })
}
