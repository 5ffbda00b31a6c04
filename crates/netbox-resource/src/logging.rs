//! Tracing setup
//!
//! Logs go to stderr; stdout is reserved for protocol JSON.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogConfig, LogFormat};

/// Environment variable overriding the configured filter
pub const LOG_ENV: &str = "NETBOX_RESOURCE_LOG";

/// Install the global subscriber
///
/// # Errors
/// Returns error if the filter directive is invalid or a subscriber is
/// already installed
pub fn init(config: &LogConfig) -> eyre::Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
