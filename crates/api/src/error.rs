use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use matserve_core::CoreError;
use matserve_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and persistence errors and adds the HTTP-specific
/// cases. Implements [`IntoResponse`] to produce the service's fixed JSON
/// error bodies:
///
/// - `400 {"status":"error","message":"Unknown task"}`
/// - `500 {"status":"error","message":<description>}` for everything else
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body was not valid JSON for a task request.
    ///
    /// Surfaced as 500 with the parser's message, matching the reference
    /// service, which treats a parse failure like any other thrown error
    /// rather than a client error.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The request named a task this service does not implement.
    #[error("Unknown task")]
    UnknownTask,

    /// A computation fault from the multiply kernel.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence fault from the result log.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownTask => StatusCode::BAD_REQUEST,
            AppError::Parse(_) | AppError::Core(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.to_string();
        match &self {
            AppError::UnknownTask => {
                tracing::warn!("Rejected unknown task");
            }
            other => {
                tracing::error!(error = %other, "Request failed");
            }
        }

        let body = json!({
            "status": "error",
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
