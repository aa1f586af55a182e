use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields default to the reference service's fixed values, so running
/// with no environment set reproduces the reference deployment exactly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Path of the result log file (default: `results.json` in the working
    /// directory).
    pub results_file: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `HOST`                 | `0.0.0.0`      |
    /// | `PORT`                 | `3000`         |
    /// | `RESULTS_FILE`         | `results.json` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let results_file: PathBuf = std::env::var("RESULTS_FILE")
            .unwrap_or_else(|_| "results.json".into())
            .into();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            results_file,
            request_timeout_secs,
        }
    }
}
