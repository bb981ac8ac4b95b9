//! Common test utilities and helpers

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the tracing subscriber for the test binary once. Log level
/// comes from `RUST_LOG`, defaulting to warnings only.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
