//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "code": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3dE5gH",
///   "short_url": "https://s.example.com/aB3dE5gH"
/// }
/// ```
///
/// `short_url` is relative (`/aB3dE5gH`) when no base URL is configured.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if validation fails.
/// Returns 409 Conflict if the custom code is already in use.
/// Returns 500 Internal Server Error if no free code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = match payload.code {
        Some(code) => {
            state
                .link_service
                .create_custom(&payload.url, &code)
                .await?
        }
        None => state.link_service.create_auto(&payload.url).await?,
    };

    let short_url = state.short_url(&link.code);
    tracing::info!(short_url = %short_url, url = %link.original_url, "Issued short URL");

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
    }))
}
