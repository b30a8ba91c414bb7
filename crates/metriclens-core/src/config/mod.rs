pub mod defaults;
pub mod model_config;
pub mod observability_config;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LensResult};
use crate::models::CostParameters;

pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LensConfig {
    pub model: ModelConfig,
    pub costs: CostParameters,
    pub observability: ObservabilityConfig,
}

impl LensConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> LensResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON string, falling back to defaults for missing fields.
    pub fn from_json(json_str: &str) -> LensResult<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LensResult<()> {
        self.model.validate()?;
        self.costs.validate()
    }
}
