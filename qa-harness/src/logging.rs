use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INITIALIZE_LOGGING: Once = Once::new();

/// Installs the fmt subscriber once per test process. `RUST_LOG` overrides the `info` default.
pub fn init() {
    INITIALIZE_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}
