//! Logging and tracing setup

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the env filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging and tracing
///
/// Output goes to stderr so `show --json` can be piped.
pub fn initialize_logging() -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
