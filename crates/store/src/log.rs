use std::path::{Path, PathBuf};

use matserve_core::task::TaskResult;

use crate::error::StoreError;

/// Append-only (by contract, not by mechanism) log of completed tasks.
///
/// Every append reads the whole file, pushes one record, and rewrites the
/// file in full, so the file is always a complete, valid JSON array between
/// writes. That makes each write O(total log size) — fine for a benchmark
/// harness, wrong for high-volume logging.
///
/// There is deliberately no lock around the read-modify-write cycle:
/// concurrent appends can interleave and the later writer wins, silently
/// dropping the earlier record. This lost-update race is documented current
/// behavior of the reference service and is preserved here.
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably add one record to the end of the log.
    ///
    /// A missing file starts an empty log; an unparseable file aborts the
    /// append with [`StoreError::Corrupt`] and leaves the file untouched.
    pub async fn append(&self, record: &TaskResult) -> Result<(), StoreError> {
        let mut records = self.read_all().await?;
        records.push(record.clone());

        let json = serde_json::to_string_pretty(&records).map_err(StoreError::Encode)?;
        tokio::fs::write(&self.path, json).await?;

        tracing::debug!(
            path = %self.path.display(),
            total = records.len(),
            "Appended task result"
        );
        Ok(())
    }

    /// Read the full log in order.
    ///
    /// A missing file and an empty or whitespace-only file both read as an
    /// empty log.
    pub async fn read_all(&self) -> Result<Vec<TaskResult>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(StoreError::Corrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use matserve_core::task::{TaskRequest, MATRIX_MULTIPLICATION};

    fn sample_record(result: Vec<Vec<f64>>) -> TaskResult {
        let request = TaskRequest {
            task_name: MATRIX_MULTIPLICATION.to_string(),
            matrix_a: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            matrix_b: vec![vec![5.0, 6.0], vec![7.0, 8.0]],
        };
        TaskResult::new(request, result)
    }

    #[tokio::test]
    async fn first_append_creates_single_element_array() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultLog::new(dir.path().join("results.json"));

        log.append(&sample_record(vec![vec![19.0, 22.0], vec![43.0, 50.0]]))
            .await
            .unwrap();

        let records = log.read_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].result,
            vec![vec![19.0, 22.0], vec![43.0, 50.0]]
        );

        // On disk the file must be a valid JSON array, pretty-printed.
        let raw = std::fs::read_to_string(log.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert!(raw.contains('\n'), "log should be pretty-printed");
    }

    #[tokio::test]
    async fn sequential_appends_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultLog::new(dir.path().join("results.json"));

        for n in 0..5 {
            log.append(&sample_record(vec![vec![n as f64]])).await.unwrap();
        }

        let records = log.read_all().await.unwrap();
        assert_eq!(records.len(), 5);
        for (n, record) in records.iter().enumerate() {
            assert_eq!(record.result, vec![vec![n as f64]]);
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultLog::new(dir.path().join("results.json"));

        assert!(log.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn whitespace_only_file_reads_as_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, "  \n\t ").unwrap();
        let log = ResultLog::new(&path);

        assert!(log.read_all().await.unwrap().is_empty());

        // And appending on top of it works normally.
        log.append(&sample_record(vec![vec![1.0]])).await.unwrap();
        assert_eq!(log.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_aborts_append_and_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, "{ not an array").unwrap();
        let log = ResultLog::new(&path);

        let err = log.append(&sample_record(vec![vec![1.0]])).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{ not an array");
    }
}
