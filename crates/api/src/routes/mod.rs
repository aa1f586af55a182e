pub mod tasks;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Response for any method the service does not handle.
///
/// The service accepts exactly one method, POST; every other method, on any
/// path, gets this not-found body.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "status": "not_found" })))
}
