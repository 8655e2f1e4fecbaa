use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Installs a JSON subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .json();

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
}
