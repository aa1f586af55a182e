//! Recompute a server-written results file and check each entry.

use std::path::Path;

use anyhow::Context;

use matserve_core::matrix;
use matserve_core::task::{TaskResult, MATRIX_MULTIPLICATION};

/// Per-entry verification outcome.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    UnknownTask,
}

/// Recompute one log entry and compare against its stored result.
///
/// Fixture matrices are integer-valued, so recomputation is exact and a
/// straight equality comparison is sound.
pub fn verify_entry(entry: &TaskResult) -> Verdict {
    if entry.task_name != MATRIX_MULTIPLICATION {
        return Verdict::UnknownTask;
    }

    match matrix::multiply(&entry.matrix_a, &entry.matrix_b) {
        Ok(expected) if expected == entry.result => Verdict::Correct,
        _ => Verdict::Incorrect,
    }
}

/// Load a results file (a JSON array of [`TaskResult`]) and verify every
/// entry, returning verdicts in file order.
pub fn verify_file(path: &Path) -> anyhow::Result<Vec<Verdict>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let entries: Vec<TaskResult> = serde_json::from_str(&contents)
        .with_context(|| format!("cannot parse {}", path.display()))?;

    Ok(entries.iter().map(verify_entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use matserve_core::task::TaskRequest;

    fn entry(result: Vec<Vec<f64>>) -> TaskResult {
        let request = TaskRequest {
            task_name: MATRIX_MULTIPLICATION.to_string(),
            matrix_a: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            matrix_b: vec![vec![5.0, 6.0], vec![7.0, 8.0]],
        };
        TaskResult::new(request, result)
    }

    #[test]
    fn accepts_correct_result() {
        let entry = entry(vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
        assert_eq!(verify_entry(&entry), Verdict::Correct);
    }

    #[test]
    fn rejects_incorrect_result() {
        let entry = entry(vec![vec![19.0, 22.0], vec![43.0, 51.0]]);
        assert_eq!(verify_entry(&entry), Verdict::Incorrect);
    }

    #[test]
    fn flags_unknown_task_names() {
        let mut entry = entry(vec![vec![0.0]]);
        entry.task_name = "something_else".to_string();
        assert_eq!(verify_entry(&entry), Verdict::UnknownTask);
    }

    #[test]
    fn verifies_a_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let entries = vec![
            entry(vec![vec![19.0, 22.0], vec![43.0, 50.0]]),
            entry(vec![vec![0.0, 0.0], vec![0.0, 0.0]]),
        ];
        std::fs::write(&path, serde_json::to_string_pretty(&entries).unwrap()).unwrap();

        let verdicts = verify_file(&path).unwrap();
        assert_eq!(verdicts, vec![Verdict::Correct, Verdict::Incorrect]);
    }
}
