//! Benchmark driver for the matserve compute service.
//!
//! Three concerns, one per module:
//!
//! - [`fixtures`] — random task generation and the `tasks.json` fixture file.
//! - [`runner`] — replaying fixtures against a running server with timing.
//! - [`verify`] — recomputing a server-written results file to check it.

pub mod fixtures;
pub mod runner;
pub mod verify;
