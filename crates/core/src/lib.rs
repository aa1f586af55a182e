//! Domain types and pure compute logic for the matserve benchmark service.
//!
//! This crate holds everything that does not touch the network or the
//! filesystem: the [`Matrix`](matrix::Matrix) representation, the dense
//! multiplication kernel, and the task request/result types shared by the
//! HTTP server, the result store, and the bench driver.

pub mod error;
pub mod matrix;
pub mod task;

pub use error::CoreError;
