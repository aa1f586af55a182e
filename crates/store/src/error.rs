#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The result file could not be read or written.
    #[error("result log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The result file exists but does not hold a valid JSON array of records.
    #[error("result log is corrupt: {0}")]
    Corrupt(serde_json::Error),

    /// A record could not be serialized for writing.
    #[error("failed to encode result log: {0}")]
    Encode(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_write_side_json_errors_read_differently() {
        let json_err = || serde_json::from_str::<serde_json::Value>("nope").unwrap_err();

        let corrupt = StoreError::Corrupt(json_err()).to_string();
        let encode = StoreError::Encode(json_err()).to_string();

        assert!(corrupt.starts_with("result log is corrupt"));
        assert!(encode.starts_with("failed to encode result log"));
    }
}
