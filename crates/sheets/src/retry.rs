//! Bounded retry around a `SheetsClient`.

use std::time::Duration;

use crate::client::{SheetsClient, SheetsError, ValueInputMode};
use crate::range::SheetRange;

/// Retry configuration: how many attempts, and the pause between them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(250),
        }
    }
}

/// Wraps a client so transient store failures are retried a bounded number
/// of times before surfacing.
///
/// The underlying call is synchronous; this layer bounds *attempts*, not
/// wall time. Per-attempt timeouts belong to the concrete transport's own
/// configuration.
#[derive(Debug)]
pub struct RetrySheets<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S: SheetsClient> RetrySheets<S> {
    pub fn new(inner: S, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn attempt<T>(
        &self,
        op: &str,
        range: &SheetRange,
        call: impl Fn() -> Result<T, SheetsError>,
    ) -> Result<T, SheetsError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut last = None;
        for n in 1..=attempts {
            match call() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::warn!(
                        op,
                        range = %range,
                        attempt = n,
                        of = attempts,
                        error = %err,
                        "store call failed"
                    );
                    last = Some(err);
                    if n < attempts {
                        std::thread::sleep(self.policy.backoff);
                    }
                }
            }
        }
        // attempts >= 1, so at least one error was recorded.
        Err(last.unwrap_or_else(|| SheetsError::unavailable("retry budget exhausted")))
    }
}

impl<S: SheetsClient> SheetsClient for RetrySheets<S> {
    fn read(&self, range: &SheetRange) -> Result<Vec<Vec<String>>, SheetsError> {
        self.attempt("read", range, || self.inner.read(range))
    }

    fn write(
        &self,
        range: &SheetRange,
        rows: Vec<Vec<String>>,
        mode: ValueInputMode,
    ) -> Result<(), SheetsError> {
        self.attempt("write", range, || self.inner.write(range, rows.clone(), mode))
    }
}
