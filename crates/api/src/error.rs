use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todolist_core::error::CoreError;
use todolist_core::validation::ValidationError;

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todolist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl AppError {
    /// Shorthand for a typed not-found error.
    pub fn not_found(entity: &'static str, id: todolist_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

const BAD_REQUEST: &str = "Bad Request";
const NOT_FOUND: &str = "Not Found";
const ERROR: &str = "Error";
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, tag, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, NOT_FOUND, core.to_string()),
                CoreError::Validation(err) => {
                    if let ValidationError::UnknownField(name) = err {
                        tracing::debug!(field = %name, "Rejected unknown field");
                    }
                    (StatusCode::BAD_REQUEST, BAD_REQUEST, err.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(Envelope::<()>::error(tag, message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, envelope tag, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            NOT_FOUND,
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ERROR,
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_resource_and_id() {
        let (status, body) = render(AppError::not_found("Activity", 42)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "Not Found");
        assert_eq!(body["message"], "Activity with ID 42 Not Found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn unknown_field_maps_to_bad_request() {
        let err = AppError::from(ValidationError::UnknownField("colour".into()));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "Bad Request");
        assert_eq!(body["message"], "Invalid field name");
    }

    #[tokio::test]
    async fn invalid_value_carries_field_message() {
        let err = AppError::from(ValidationError::cannot_be_null("title"));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "title cannot be null");
    }

    #[tokio::test]
    async fn database_errors_are_sanitized() {
        let (status, body) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "Error");
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn row_not_found_maps_to_404() {
        let (status, _) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
