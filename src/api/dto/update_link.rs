//! DTO for the link update endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request body for `PATCH /{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New destination URL for this link.
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}
