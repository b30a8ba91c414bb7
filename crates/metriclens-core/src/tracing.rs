//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive, e.g. `metriclens_engine=debug`.
pub const LOG_ENV_VAR: &str = "METRICLENS_LOG";

/// Install the global fmt subscriber.
///
/// `METRICLENS_LOG` wins over `config.log_level`. Returns `false` when a global
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    let installed = installed.is_ok();
    if installed {
        ::tracing::debug!(json = config.json_logs, "tracing initialized");
    }
    installed
}
