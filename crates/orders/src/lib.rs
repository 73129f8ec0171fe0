//! `cafeto-orders` — order-state types consumed by menu rendering.
//!
//! Orders are created and mutated by the ordering subsystem; this crate only
//! models the shapes the chat layer hands over for display: confirmed orders
//! still in flight, the customer's unconfirmed draft, and the surrounding
//! session state.

pub mod order;
pub mod session;

pub use order::{ActiveOrder, OrderProduct, ProductSummary};
pub use session::{DraftOrder, SessionState};
