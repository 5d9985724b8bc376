//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_validator::validate_http_url;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,

    /// Optional custom short code. A code is generated when absent.
    #[validate(custom(function = "validate_custom_code"))]
    pub code: Option<String>,
}

/// Response carrying the allocated code and its full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_without_code() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url": "http://example.com"}"#).unwrap();

        assert!(request.code.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let request: ShortenRequest = serde_json::from_str(r#"{"url": "not-a-url"}"#).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_invalid_code_rejected() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url": "http://example.com", "code": "a/b"}"#).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));
    }
}
