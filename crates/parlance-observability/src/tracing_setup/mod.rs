//! Tracing setup: subscriber installation, span macros, and structured events.

pub mod events;
pub mod spans;

use parlance_core::config::ObservabilityConfig;
use parlance_core::errors::{ParlanceError, ParlanceResult};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "PARLANCE_LOG";

/// Initialize the global subscriber from config.
///
/// `PARLANCE_LOG` takes precedence over `config.log_level`. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> ParlanceResult<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };
    install(filter, config.json)
}

/// Initialize with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> ParlanceResult<()> {
    install(build_filter(filter)?, json)
}

fn build_filter(directives: &str) -> ParlanceResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| ParlanceError::Observability {
        reason: format!("invalid log filter {directives:?}: {e}"),
    })
}

fn install(filter: EnvFilter, json: bool) -> ParlanceResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ParlanceError::Observability {
        reason: e.to_string(),
    })
}
