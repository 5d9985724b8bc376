//! Handlers for link management endpoints (update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::ShortenResponse;
use crate::api::dto::update_link::UpdateLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Points an existing short link at a new destination.
///
/// # Endpoint
///
/// `PATCH /{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://new-destination.com" }
/// ```
///
/// The code and creation time are unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 422 Unprocessable Entity if validation fails.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let updated = state.link_service.update(&code, &payload.url).await?;

    if !updated {
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ));
    }

    let short_url = state.short_url(&code);

    Ok(Json(ShortenResponse { code, short_url }))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// The row is removed; the code becomes free for later creations.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.link_service.delete(&code).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
