//! Decimal parsing and formatting for store-native string cells.
//!
//! The backing store keeps every cell as a string; prices and stock travel
//! through this module on both the read and the write path.

/// Parse a cell value as a decimal.
///
/// Lenient on whitespace, strict on content: any failure is `None`, never an
/// error. Non-finite values are rejected (a cell saying "inf" is garbage, not
/// stock).
pub fn parse(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a decimal in its minimal form ("12.5", "10", not "10.0000").
///
/// Invariant: `parse(&format(x)) == Some(x)` for every finite `x`, so values
/// survive the store-write/read boundary without precision loss.
pub fn format(value: f64) -> String {
    format!("{value}")
}

/// Render an amount of money in soles with two decimals ("S/42.50").
pub fn format_soles(amount: f64) -> String {
    format!("S/{amount:.2}")
}
