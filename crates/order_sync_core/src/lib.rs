//! Shared order synchronization domain primitives.
//!
//! This crate owns the job contract, date-window resolution, and
//! marketplace configuration. It intentionally excludes HTTP, AWS SDK,
//! and Lambda runtime concerns; those live in `order_sync_lambda`.

pub mod config;
pub mod contract;
pub mod window;
