//! Result log persistence for the matserve benchmark service.
//!
//! One flat file holding a pretty-printed JSON array of completed tasks,
//! rewritten in full on every append (read-modify-write, not incremental
//! append). This plays the role a database crate would in a larger service.

pub mod error;
mod log;

pub use error::StoreError;
pub use log::ResultLog;
