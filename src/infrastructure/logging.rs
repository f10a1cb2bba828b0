//! Logging system initialization
//!
//! Console logging via tracing-subscriber. RUST_LOG takes precedence; the
//! configured level is the fallback filter.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
