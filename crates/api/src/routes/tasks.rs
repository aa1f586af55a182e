//! Method dispatch and the task-submission pipeline.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use matserve_core::matrix;
use matserve_core::task::{TaskRequest, TaskResult, MATRIX_MULTIPLICATION};

use crate::error::{AppError, AppResult};
use crate::routes::not_found;
use crate::state::AppState;

/// Entry point for every request: dispatch on method only.
///
/// The reference service has no path routing -- a POST to any path runs the
/// task pipeline, and every other method gets the not-found body.
pub async fn dispatch(method: Method, state: State<AppState>, body: Bytes) -> Response {
    if method == Method::POST {
        submit_task(state, body).await.into_response()
    } else {
        not_found().await.into_response()
    }
}

/// POST (any path) -- run a task and persist the input/output pair.
///
/// The body is buffered in full and parsed by hand rather than through the
/// `Json` extractor: a parse failure must surface as a 500 carrying the
/// parser's message, not as axum's 400/415 rejection.
///
/// The result log is only touched after a successful computation; every
/// failure path leaves it exactly as it was.
pub async fn submit_task(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let request: TaskRequest = serde_json::from_slice(&body)?;

    if request.task_name != MATRIX_MULTIPLICATION {
        return Err(AppError::UnknownTask);
    }

    let result = matrix::multiply(&request.matrix_a, &request.matrix_b)?;

    let record = TaskResult::new(request, result);
    state.log.append(&record).await?;

    tracing::info!(
        rows = record.result.len(),
        cols = record.result.first().map(Vec::len).unwrap_or(0),
        "Task completed"
    );

    Ok(Json(json!({ "status": "ok", "result": record.result })))
}
