//! In-memory sheet grids.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::client::{SheetsClient, SheetsError, ValueInputMode};
use crate::range::SheetRange;

/// One recorded `write` call, for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub range: String,
    pub rows: Vec<Vec<String>>,
    pub mode: ValueInputMode,
}

#[derive(Debug, Default)]
struct Inner {
    sheets: HashMap<String, Vec<Vec<String>>>,
    writes: Vec<RecordedWrite>,
}

/// In-memory `SheetsClient`.
///
/// Intended for tests/dev. Keeps every sheet as a dense row/column grid and
/// journals each write so callers can assert exactly which cells were
/// touched, in which order.
#[derive(Debug, Default)]
pub struct InMemorySheets {
    inner: RwLock<Inner>,
}

impl InMemorySheets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sheet with rows (builder style).
    pub fn with_sheet<R, C>(self, name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'static str>,
    {
        let grid = rows
            .into_iter()
            .map(|row| row.into_iter().map(str::to_string).collect())
            .collect();
        if let Ok(mut inner) = self.inner.write() {
            inner.sheets.insert(name.into(), grid);
        }
        self
    }

    /// Snapshot of a sheet's current grid.
    pub fn rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        self.inner.read().ok()?.sheets.get(sheet).cloned()
    }

    /// Snapshot of the write journal, in call order.
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.inner
            .read()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }
}

impl SheetsClient for InMemorySheets {
    fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>, SheetsError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| SheetsError::unavailable("lock poisoned"))?;

        let grid = inner
            .sheets
            .get(range.sheet())
            .ok_or_else(|| SheetsError::invalid_range(range, "unknown sheet"))?;

        let first = (range.start_row().saturating_sub(1)) as usize;
        let last = range
            .end_row()
            .map(|row| row as usize)
            .unwrap_or(grid.len());
        let start_col = SheetRange::col_index(range.start_col());
        let end_col = SheetRange::col_index(range.end_col());

        let rows = grid
            .iter()
            .skip(first)
            .take(last.saturating_sub(first))
            .map(|row| {
                row.iter()
                    .skip(start_col)
                    .take(end_col.saturating_sub(start_col) + 1)
                    .cloned()
                    .collect()
            })
            .collect();
        Ok(rows)
    }

    fn write(
        &self,
        range: &SheetRange,
        rows: Vec<Vec<String>>,
        mode: ValueInputMode,
    ) -> Result<(), SheetsError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| SheetsError::unavailable("lock poisoned"))?;

        inner.writes.push(RecordedWrite {
            range: range.to_string(),
            rows: rows.clone(),
            mode,
        });

        let anchor_row = (range.start_row().saturating_sub(1)) as usize;
        let anchor_col = SheetRange::col_index(range.start_col());
        let grid = inner.sheets.entry(range.sheet().to_string()).or_default();

        for (r, values) in rows.into_iter().enumerate() {
            let row_idx = anchor_row + r;
            if grid.len() <= row_idx {
                grid.resize(row_idx + 1, Vec::new());
            }
            let row = &mut grid[row_idx];
            for (c, value) in values.into_iter().enumerate() {
                let col_idx = anchor_col + c;
                if row.len() <= col_idx {
                    row.resize(col_idx + 1, String::new());
                }
                row[col_idx] = value;
            }
        }
        Ok(())
    }
}
