use serde::{Deserialize, Serialize};

use crate::order::ProductSummary;

/// A customer's in-progress, unconfirmed selection.
///
/// Every field is optional: the draft accretes as the conversation advances
/// (product chosen, then quantity, then total).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftOrder {
    #[serde(default)]
    pub product: Option<ProductSummary>,
    #[serde(default)]
    pub quantity_kg: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl DraftOrder {
    /// A draft is only worth showing once a product has been picked.
    pub fn has_product(&self) -> bool {
        self.product.is_some()
    }
}

/// Per-customer conversational state.
///
/// The chat layer owns this container; this core only inspects the draft
/// order. Everything else rides along opaquely so round-tripping the state
/// never loses fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub draft: Option<DraftOrder>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionState {
    /// The draft order, if one has progressed far enough to display.
    pub fn displayable_draft(&self) -> Option<&DraftOrder> {
        self.draft.as_ref().filter(|draft| draft.has_product())
    }
}
