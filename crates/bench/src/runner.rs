//! Replay fixtures against a running server, measuring wall-clock time.

use std::time::Instant;

use matserve_core::task::TaskRequest;

/// Outcome of one replayed task.
#[derive(Debug)]
pub struct RunReport {
    pub task_name: String,
    pub elapsed_ms: u128,
    pub status: reqwest::StatusCode,
}

/// POST each task to `url` in order, timing each request.
///
/// A task that fails to send is logged and skipped, matching the reference
/// tester; the remaining tasks still run.
pub async fn run_tasks(url: &str, tasks: &[TaskRequest]) -> Vec<RunReport> {
    let client = reqwest::Client::new();
    let mut reports = Vec::with_capacity(tasks.len());

    for task in tasks {
        let start = Instant::now();
        let response = match client.post(url).json(task).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(task = %task.task_name, error = %err, "Request failed to send");
                continue;
            }
        };
        let elapsed_ms = start.elapsed().as_millis();

        reports.push(RunReport {
            task_name: task.task_name.clone(),
            elapsed_ms,
            status: response.status(),
        });
    }

    reports
}
