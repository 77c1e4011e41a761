//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Build the log filter: `RUST_LOG` wins, otherwise `level` from config.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| Error::config(format!("invalid logging.level '{level}': {e}"))),
    }
}

/// Install the global fmt subscriber.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = env_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}
