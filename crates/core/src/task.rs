//! Task request and result types, camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

/// The one task name this service understands.
pub const MATRIX_MULTIPLICATION: &str = "matrix_multiplication";

/// A task submitted over the wire: which computation to run and its operands.
///
/// Also the fixture format the bench driver writes into `tasks.json` and
/// replays against a running server.
///
/// Every field defaults when absent: a missing task name reads as empty and
/// is rejected as an unknown task, an unknown task is rejected before its
/// operands are ever looked at, and a known task with a missing operand
/// faults in the kernel, not in deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub matrix_a: Matrix,
    #[serde(default)]
    pub matrix_b: Matrix,
}

/// A completed task as persisted in the result log.
///
/// Immutable once created; the log only ever appends these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Completion time in UTC, serialized as an ISO-8601 / RFC 3339 string.
    pub timestamp: DateTime<Utc>,
    pub task_name: String,
    pub matrix_a: Matrix,
    pub matrix_b: Matrix,
    pub result: Matrix,
}

impl TaskResult {
    /// Stamp a finished computation with the current time.
    pub fn new(request: TaskRequest, result: Matrix) -> Self {
        Self {
            timestamp: Utc::now(),
            task_name: request.task_name,
            matrix_a: request.matrix_a,
            matrix_b: request.matrix_b,
            result,
        }
    }
}
