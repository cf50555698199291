//! Runtime integration for the order synchronization job.
//!
//! This crate owns Lambda handler logic, SQS record decoding, and HTTP
//! adapters for the marketplace listing API and the normalization sink.
//! Deterministic contract, window, and configuration primitives live in
//! `order_sync_core`.

pub mod adapters;
pub mod handlers;
pub mod observer;
