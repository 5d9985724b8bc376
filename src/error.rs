//! Application error taxonomy and its HTTP representation.
//!
//! Every layer below the HTTP boundary returns [`AppError`]. Handlers propagate
//! it with `?` and axum renders it through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "conflict", "message": "Code already exists", "details": { "code": "abc" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input rejected at the boundary.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The addressed short link does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A unique constraint rejected the write (custom code already taken).
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Auto-generation collided on every attempt.
    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// Storage or other server-side failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for unique-constraint rejections.
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict { .. })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::ExhaustedRetries { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::Validation { details, .. } => ("validation_error", details.clone()),
            AppError::NotFound { details, .. } => ("not_found", details.clone()),
            AppError::Conflict { details, .. } => ("conflict", details.clone()),
            AppError::ExhaustedRetries { attempts } => {
                ("code_generation_failed", json!({ "attempts": attempts }))
            }
            AppError::Internal { details, .. } => ("internal_error", details.clone()),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

/// Classifies a driver error: unique violations become [`AppError::Conflict`],
/// everything else is logged and reported as [`AppError::Internal`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("taken", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ExhaustedRetries { attempts: 5 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_exhausted_retries_info() {
        let info = AppError::ExhaustedRetries { attempts: 5 }.to_error_info();

        assert_eq!(info.code, "code_generation_failed");
        assert_eq!(info.details["attempts"], 5);
        assert!(info.message.contains("5 attempts"));
    }

    #[test]
    fn test_conflict_info_keeps_details() {
        let info = AppError::conflict("Code already exists", json!({ "code": "abc" })).to_error_info();

        assert_eq!(info.code, "conflict");
        assert_eq!(info.message, "Code already exists");
        assert_eq!(info.details["code"], "abc");
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(!err.is_conflict());
    }
}
