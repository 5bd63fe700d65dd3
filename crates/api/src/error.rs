use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use owly_core::error::CoreError;
use owly_openai::OpenAiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"error": message}` JSON
/// body every endpoint uses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `owly_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Detail is logged server-side only;
    /// clients get a generic message.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A content-generation upstream failure. The upstream message is
    /// surfaced so the admin panel can show what went wrong.
    #[error(transparent)]
    Upstream(#[from] OpenAiError),

    /// An internal error with a human-readable message (file I/O and the
    /// like). The message is surfaced; full detail is logged.
    #[error("{0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "entity not found");
                    (StatusCode::NOT_FOUND, core.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Er ging iets mis".to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Er ging iets mis".to_string(),
                )
            }

            AppError::Upstream(err) => {
                tracing::error!(error = %err, "upstream content generation error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
