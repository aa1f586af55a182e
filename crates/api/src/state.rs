use std::sync::Arc;

use matserve_store::ResultLog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The result log is
/// shared without any lock: the read-modify-write append is intentionally
/// unsynchronized, matching the reference service.
#[derive(Clone)]
pub struct AppState {
    /// The on-disk result log.
    pub log: Arc<ResultLog>,
}
