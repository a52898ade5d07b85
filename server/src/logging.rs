use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a stdout subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if let Err(err) = result {
        eprintln!("failed to initialize logging: {err}");
    }
}
