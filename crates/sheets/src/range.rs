//! A1-style range addressing.

use serde::{Deserialize, Serialize};

/// Address of a rectangular region in the backing store.
///
/// Renders in A1 notation: `<Sheet>!<StartCol><StartRow>:<EndCol>[<EndRow>]`,
/// or the bare `<Sheet>!<Col><Row>` form for a single cell. Rows are
/// 1-indexed as in the store itself; columns are single letters (the fixed
/// catalog schema spans A–J).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRange {
    sheet: String,
    start_col: char,
    start_row: u32,
    end: Option<(char, Option<u32>)>,
}

impl SheetRange {
    /// Full-height column span starting at `start_row`, e.g. `Catalogo!A1:J`.
    pub fn columns(sheet: impl Into<String>, start_col: char, end_col: char) -> Self {
        Self {
            sheet: sheet.into(),
            start_col,
            start_row: 1,
            end: Some((end_col, None)),
        }
    }

    /// Bounded rectangle, e.g. `Catalogo!A1:J20`.
    pub fn rect(
        sheet: impl Into<String>,
        start_col: char,
        start_row: u32,
        end_col: char,
        end_row: u32,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            start_col,
            start_row,
            end: Some((end_col, Some(end_row))),
        }
    }

    /// Single cell, e.g. `Catalogo!G5`.
    pub fn cell(sheet: impl Into<String>, col: char, row: u32) -> Self {
        Self {
            sheet: sheet.into(),
            start_col: col,
            start_row: row,
            end: None,
        }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn start_col(&self) -> char {
        self.start_col
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// End column (inclusive); a single cell ends where it starts.
    pub fn end_col(&self) -> char {
        match self.end {
            Some((col, _)) => col,
            None => self.start_col,
        }
    }

    /// End row (inclusive), if the range is bounded below.
    pub fn end_row(&self) -> Option<u32> {
        match self.end {
            Some((_, row)) => row,
            None => Some(self.start_row),
        }
    }

    /// Zero-based column index of a column letter ('A' => 0).
    pub(crate) fn col_index(col: char) -> usize {
        (col as u8).saturating_sub(b'A') as usize
    }
}

impl core::fmt::Display for SheetRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}!{}{}", self.sheet, self.start_col, self.start_row)?;
        if let Some((end_col, end_row)) = self.end {
            write!(f, ":{end_col}")?;
            if let Some(row) = end_row {
                write!(f, "{row}")?;
            }
        }
        Ok(())
    }
}
