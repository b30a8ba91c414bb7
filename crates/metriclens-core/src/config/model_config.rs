//! ROI model configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Parameters of the ROI/intervention model and the alignment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Investment the ROI is measured against. 0 disables ROI (reported as 0).
    pub total_investment: f64,
    /// Scaling from KPI improvement (percentage points) to interventions avoided.
    pub interventions_per_point: f64,
    /// Score dimension read from each quality record.
    pub score_dimension: String,
    /// Sort both series by date before aligning instead of trusting caller order.
    pub sort_inputs: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            total_investment: defaults::DEFAULT_TOTAL_INVESTMENT,
            interventions_per_point: defaults::DEFAULT_INTERVENTIONS_PER_POINT,
            score_dimension: defaults::DEFAULT_SCORE_DIMENSION.to_string(),
            sort_inputs: false,
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("total_investment", self.total_investment)?;
        check_non_negative("interventions_per_point", self.interventions_per_point)?;
        if self.score_dimension.trim().is_empty() {
            return Err(ConfigError::EmptyDimension);
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber { field, value })
    }
}
