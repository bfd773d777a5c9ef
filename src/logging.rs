//! Logging setup
//!
//! Events go to stderr so stdout stays clean for listings and `--stdout`
//! exports. The filter comes from `CONTAS_LOG` when set, otherwise from the
//! configured log level.

use tracing_subscriber::EnvFilter;

use crate::error::{ContaError, ContaResult};

/// Environment variable holding an env-filter directive, e.g. `contas=debug`
pub const LOG_ENV: &str = "CONTAS_LOG";

/// Build the event filter, preferring `CONTAS_LOG` over `fallback`
pub fn filter(fallback: &str) -> ContaResult<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .map_err(|e| ContaError::Config(format!("Invalid log level '{}': {}", fallback, e))),
    }
}

/// Install the global subscriber
pub fn init(fallback: &str) -> ContaResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(fallback)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ContaError::Config(format!("Failed to install logger: {}", e)))
}
