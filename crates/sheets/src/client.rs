//! The store client contract.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::range::SheetRange;

/// How the store should interpret written values.
///
/// `UserEntered` lets the store parse numbers and dates the same way a human
/// typing into the sheet would; `Raw` stores the strings verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueInputMode {
    Raw,
    UserEntered,
}

/// Store access error.
///
/// Infrastructure failures only; "row not found" and other domain outcomes
/// are not errors at this layer.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The store could not be reached, or rejected the call transiently.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The range does not address anything the store knows about.
    #[error("invalid range {range}: {reason}")]
    InvalidRange { range: String, reason: String },
}

impl SheetsError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn invalid_range(range: &SheetRange, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            range: range.to_string(),
            reason: reason.into(),
        }
    }
}

/// Read/write access to rectangular cell ranges.
///
/// Calls are synchronous request/response with no batching and no caching;
/// every caller issues its own reads. Two concurrent writers race at cell
/// granularity and the last write wins — this layer offers no conflict
/// detection.
///
/// Implementations must:
/// - return rows top-to-bottom, each row left-to-right within the range
/// - omit nothing in the middle of the range (short rows are allowed at the
///   right edge, as the store drops trailing empty cells)
/// - treat a write to a single-cell range as exactly one cell mutation
pub trait SheetsClient: Send + Sync {
    /// Read all populated rows within the range.
    fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>, SheetsError>;

    /// Write rows into the range, anchored at its top-left corner.
    fn write(
        &self,
        range: &SheetRange,
        rows: Vec<Vec<String>>,
        mode: ValueInputMode,
    ) -> Result<(), SheetsError>;
}

impl<S> SheetsClient for Arc<S>
where
    S: SheetsClient + ?Sized,
{
    fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>, SheetsError> {
        (**self).read(range)
    }

    fn write(
        &self,
        range: &SheetRange,
        rows: Vec<Vec<String>>,
        mode: ValueInputMode,
    ) -> Result<(), SheetsError> {
        (**self).write(range, rows, mode)
    }
}
