//! Tracing/logging setup shared by binaries and test harnesses.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: quiet overall, but keep the
/// store's and the enforcers' per-write decisions visible.
const DEFAULT_DIRECTIVES: &str = "info,tradegate_store=debug,tradegate_sales=debug";

/// Initialize process-wide tracing/logging.
///
/// JSON output; filter configurable via `RUST_LOG`, falling back to the
/// default directives above. Safe to call multiple times; subsequent calls
/// become no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // Targets stay on: the default directives filter by crate, so the crate
    // name is part of the signal.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
