//! `cafeto-sheets` — tabular store client boundary.
//!
//! The backing store is a spreadsheet-shaped service: named sheets, A1-style
//! rectangular ranges, string cells. This crate owns the narrow contract the
//! rest of the workspace consumes (`SheetsClient`), the range addressing
//! types, an in-memory implementation for tests/dev, and a bounded retry
//! wrapper for flaky transports.
//!
//! Authentication and the concrete HTTP transport live outside this
//! workspace; implementations of [`SheetsClient`] plug in here.

pub mod client;
pub mod in_memory;
pub mod range;
pub mod retry;

pub use client::{SheetsClient, SheetsError, ValueInputMode};
pub use in_memory::InMemorySheets;
pub use range::SheetRange;
pub use retry::{RetryPolicy, RetrySheets};
