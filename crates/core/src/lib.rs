//! `cafeto-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared across the workspace
//! (no infrastructure concerns): the fixed local timezone with its sheet-facing
//! timestamp format, and decimal parsing/formatting for prices and stock.

pub mod decimal;
pub mod timezone;

pub use timezone::Timezone;
