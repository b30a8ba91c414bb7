//! Caller-supplied cost parameters.

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::{LensError, LensResult};

/// Cost of one manual intervention, in money and in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    pub cost_per_intervention: f64,
    pub hours_per_intervention: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            cost_per_intervention: defaults::DEFAULT_COST_PER_INTERVENTION,
            hours_per_intervention: defaults::DEFAULT_HOURS_PER_INTERVENTION,
        }
    }
}

impl CostParameters {
    /// Validated constructor. Both values must be finite and non-negative.
    pub fn new(cost_per_intervention: f64, hours_per_intervention: f64) -> LensResult<Self> {
        let params = Self {
            cost_per_intervention,
            hours_per_intervention,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> LensResult<()> {
        check_non_negative("cost_per_intervention", self.cost_per_intervention)?;
        check_non_negative("hours_per_intervention", self.hours_per_intervention)
    }
}

fn check_non_negative(field: &str, value: f64) -> LensResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LensError::InvalidInput(format!(
            "{field} must be a finite, non-negative number (got {value})"
        )))
    }
}
