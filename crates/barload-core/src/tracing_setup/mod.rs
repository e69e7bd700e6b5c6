//! Tracing setup: structured logging and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Barload tracing subscriber.
///
/// Reads the `BARLOAD_LOG` environment variable for per-crate levels,
/// e.g. `BARLOAD_LOG=barload_estimator=debug,barload_lineup=trace`.
/// Falls back to `barload=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BARLOAD_LOG")
            .unwrap_or_else(|_| EnvFilter::new("barload=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing with a custom filter string and JSON output (for tests or embedding).
///
/// Shares the once-guard with [`init_tracing`].
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .try_init();
    });
}
