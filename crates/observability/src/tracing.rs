//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: the workspace crates at `info`,
/// everything else quiet enough to read a webhook log.
const DEFAULT_FILTER: &str = "info,cafeto=info";

/// Initialize tracing/logging for the process.
///
/// JSON lines with timestamps, filterable via `RUST_LOG`. Idempotent:
/// a second call leaves the first subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
