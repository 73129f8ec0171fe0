//! Fixed backing-store schema.
//!
//! Sheet name, column letters and header names are a wire contract shared
//! with the deployed spreadsheet; changing any of them breaks compatibility.

/// Sheet holding the catalog.
pub const SHEET: &str = "CatalogoWhatsApp";

/// First and last columns of the schema (A–J).
pub const FIRST_COL: char = 'A';
pub const LAST_COL: char = 'J';

/// Stock mutation target (column G).
pub const STOCK_COL: char = 'G';

/// Last-modified timestamp target (column J).
pub const LAST_MODIFIED_COL: char = 'J';

/// Column headers, in column order A–J.
pub mod header {
    pub const ID: &str = "ID";
    pub const NAME: &str = "Name";
    pub const PRICE_PER_KG: &str = "PricePerKg";
    pub const ORIGIN: &str = "Origin";
    pub const SCORE: &str = "Score";
    pub const FARMER: &str = "Farmer";
    pub const STOCK_KG: &str = "StockKg";
    pub const DESCRIPTION: &str = "Description";
    pub const STATUS: &str = "Status";
    pub const LAST_MODIFIED: &str = "LastModified";
}
