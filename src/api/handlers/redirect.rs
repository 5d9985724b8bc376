//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::warn;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `307 Temporary Redirect`, so clients repeat the original
/// method and body against the destination. ASCII destinations are sent as
/// stored. Non-ASCII ones are re-serialized for the `Location` header, which
/// percent-encodes them (and punycodes hosts); the stored value is unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Some(original_url) = state.link_service.resolve(&code).await? else {
        warn!(code = %code, "Redirect requested for unknown code");
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ));
    };

    let location = if original_url.is_ascii() {
        original_url
    } else {
        Url::parse(&original_url).map_or(original_url, String::from)
    };

    Ok(Redirect::temporary(&location))
}
