//! `cafeto-menu` — top-level conversational menu rendering.
//!
//! Pure data-to-text: the composer merges three independent state sources
//! (active orders, the unconfirmed draft, reorder eligibility) into one
//! outgoing message. No I/O happens here, which is exactly why this crate
//! carries the heaviest test coverage in the workspace.

pub mod composer;

pub use composer::MenuComposer;
