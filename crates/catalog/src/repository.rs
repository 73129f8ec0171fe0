use chrono::Utc;
use thiserror::Error;

use cafeto_core::{Timezone, decimal};
use cafeto_sheets::{SheetRange, SheetsClient, SheetsError, ValueInputMode};

use crate::product::Product;
use crate::schema;

/// Repository-level error.
///
/// The public `fetch`/`update_stock` surface flattens these to empty/`false`
/// so the chat layer never propagates backend failures to a customer; the
/// `try_*` variants keep the structure for callers (and logs) that need to
/// tell a read failure from a write failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog read failed")]
    Read(#[source] SheetsError),

    #[error("catalog write to {cell} failed")]
    Write {
        cell: String,
        #[source]
        source: SheetsError,
    },

    #[error("product {id} not found")]
    ProductNotFound { id: String },
}

/// Catalog access over the backing store.
///
/// Stateless between calls: every operation re-reads the full catalog range.
/// Mutations are last-write-wins at cell granularity; concurrent updates to
/// the same product are not detected.
#[derive(Debug)]
pub struct CatalogRepository<S> {
    client: S,
    sheet: String,
    timezone: Timezone,
}

impl<S: SheetsClient> CatalogRepository<S> {
    pub fn new(client: S, timezone: Timezone) -> Self {
        Self {
            client,
            sheet: schema::SHEET.to_string(),
            timezone,
        }
    }

    /// The underlying store client (tests inspect write journals through it).
    pub fn client(&self) -> &S {
        &self.client
    }

    fn full_range(&self) -> SheetRange {
        SheetRange::columns(self.sheet.as_str(), schema::FIRST_COL, schema::LAST_COL)
    }

    /// Visible products, in sheet order.
    ///
    /// Degrades to empty on store failure (logged): at this layer "no
    /// products" and "store unreachable" are deliberately the same answer,
    /// so the conversation can continue. Use [`try_fetch`](Self::try_fetch)
    /// to distinguish them.
    pub fn fetch(&self) -> Vec<Product> {
        match self.try_fetch() {
            Ok(products) => products,
            Err(err) => {
                tracing::error!(error = %err, "catalog fetch degraded to empty");
                Vec::new()
            }
        }
    }

    /// Visible products, or the read error.
    pub fn try_fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let rows = self
            .client
            .read(&self.full_range())
            .map_err(CatalogError::Read)?;

        // Header row plus at least one data row, else there is nothing here.
        let Some((headers, data)) = rows.split_first() else {
            return Ok(Vec::new());
        };
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let products: Vec<Product> = data
            .iter()
            .filter_map(|row| Product::from_row(headers, row))
            .filter(Product::is_visible)
            .collect();
        tracing::debug!(count = products.len(), "catalog fetched");
        Ok(products)
    }

    /// First visible product whose name contains `term`, case-insensitively.
    ///
    /// Linear scan over a fresh fetch; the catalog is tens of items, an
    /// index would be overhead without a payoff.
    pub fn search(&self, term: &str) -> Option<Product> {
        let needle = term.to_lowercase();
        self.fetch().into_iter().find(|product| {
            product
                .name()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
    }

    /// Set a product's stock and refresh its last-modified timestamp.
    ///
    /// Matches rows by exact id, over the *unfiltered* rows: inactive and
    /// out-of-stock products remain updatable. Returns `false` when the id
    /// is unknown or the store failed (logged); no partial signal beyond
    /// that — see [`try_update_stock`](Self::try_update_stock).
    pub fn update_stock(&self, product_id: &str, new_stock: f64) -> bool {
        match self.try_update_stock(product_id, new_stock) {
            Ok(()) => true,
            Err(CatalogError::ProductNotFound { id }) => {
                tracing::warn!(%id, "stock update target not found");
                false
            }
            Err(err) => {
                tracing::error!(error = %err, product_id, "stock update failed");
                false
            }
        }
    }

    /// Stock update with the failure structure intact.
    ///
    /// The stock cell (column G) and the timestamp cell (column J) are two
    /// independent single-cell writes, in that order. They are not atomic: a
    /// failure on the second write leaves the stock fresh and the timestamp
    /// stale. That inconsistency is accepted; the returned error names the
    /// cell that failed.
    pub fn try_update_stock(&self, product_id: &str, new_stock: f64) -> Result<(), CatalogError> {
        let rows = self
            .client
            .read(&self.full_range())
            .map_err(CatalogError::Read)?;

        // Sheet rows are 1-indexed with the header on row 1, so the data row
        // at index i sits on sheet row i + 1.
        let row_number = rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| row.first().map(String::as_str) == Some(product_id))
            .map(|(index, _)| index as u32 + 1)
            .ok_or_else(|| CatalogError::ProductNotFound {
                id: product_id.to_string(),
            })?;

        let stock_cell = SheetRange::cell(self.sheet.as_str(), schema::STOCK_COL, row_number);
        self.write_cell(&stock_cell, decimal::format(new_stock))?;

        let stamp_cell =
            SheetRange::cell(self.sheet.as_str(), schema::LAST_MODIFIED_COL, row_number);
        self.write_cell(&stamp_cell, self.timezone.stamp(Utc::now()))?;

        tracing::info!(product_id, new_stock, row = row_number, "stock updated");
        Ok(())
    }

    fn write_cell(&self, cell: &SheetRange, value: String) -> Result<(), CatalogError> {
        self.client
            .write(cell, vec![vec![value]], ValueInputMode::UserEntered)
            .map_err(|source| CatalogError::Write {
                cell: cell.to_string(),
                source,
            })
    }
}
