//! Shared setup for unit and integration tests.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs a stderr log subscriber once per test binary.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at debug level.
pub fn init_test_setup() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rstree=debug"));
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter);

        // another harness may have installed one already
        if tracing_subscriber::registry().with(layer).try_init().is_ok() {
            info!("test logging initialized");
        }
    });
}
