use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cafeto_core::decimal;

use crate::schema::header;

/// Product status lifecycle as stored in the Status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    /// Case-insensitive parse; anything else is an unknown status.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("ACTIVE") {
            Some(Self::Active)
        } else if trimmed.eq_ignore_ascii_case("INACTIVE") {
            Some(Self::Inactive)
        } else {
            None
        }
    }
}

/// One catalog row, reconstructed against the header row.
///
/// The store is schemaless at the row level, so the record keeps the raw
/// header-name → cell-value mapping; the typed accessors read the fixed
/// schema headers on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl Product {
    /// Zip a data row against the header row, positionally.
    ///
    /// Headers beyond the row's length are not assigned; a row longer than
    /// the header list is truncated to header length. A row whose first cell
    /// is empty is not a product.
    pub fn from_row(headers: &[String], row: &[String]) -> Option<Self> {
        if row.first().map(|cell| cell.trim().is_empty()).unwrap_or(true) {
            return None;
        }
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Some(Self { fields })
    }

    /// Raw cell value under a header, if the row reached that column.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Row identity: the first schema column.
    pub fn id(&self) -> &str {
        self.get(header::ID).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.get(header::NAME)
    }

    /// Price per kilogram in its store-native string form.
    pub fn price_per_kg(&self) -> Option<&str> {
        self.get(header::PRICE_PER_KG)
    }

    pub fn origin(&self) -> Option<&str> {
        self.get(header::ORIGIN)
    }

    /// Cupping score out of 100, store-native form.
    pub fn score(&self) -> Option<&str> {
        self.get(header::SCORE)
    }

    pub fn farmer(&self) -> Option<&str> {
        self.get(header::FARMER)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(header::DESCRIPTION)
    }

    pub fn last_modified(&self) -> Option<&str> {
        self.get(header::LAST_MODIFIED)
    }

    /// Available stock in kilograms, if the cell parses.
    pub fn stock_kg(&self) -> Option<f64> {
        self.get(header::STOCK_KG).and_then(decimal::parse)
    }

    pub fn status(&self) -> Option<ProductStatus> {
        self.get(header::STATUS).and_then(ProductStatus::parse)
    }

    /// The customer only ever sees visible products: ACTIVE status and
    /// positive, parseable stock. Unparsable stock means not visible,
    /// never an error.
    pub fn is_visible(&self) -> bool {
        matches!(self.status(), Some(ProductStatus::Active))
            && self.stock_kg().is_some_and(|kg| kg > 0.0)
    }
}
