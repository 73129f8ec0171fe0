//! Tracing/logging setup shared by every host of the core crates.
//!
//! The core crates only *emit* `tracing` events; which subscriber receives
//! them is the host's call. This crate is that call for the common case.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
