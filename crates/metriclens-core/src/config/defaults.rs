//! Default values shared by config structs and model parameters.

pub const DEFAULT_COST_PER_INTERVENTION: f64 = 150.0;
pub const DEFAULT_HOURS_PER_INTERVENTION: f64 = 2.0;

/// Cost of the tooling/engineering investment being evaluated.
pub const DEFAULT_TOTAL_INVESTMENT: f64 = 5000.0;

/// Interventions avoided per percentage point of KPI improvement.
pub const DEFAULT_INTERVENTIONS_PER_POINT: f64 = 10.0;

pub const DEFAULT_SCORE_DIMENSION: &str = "factuality";

pub const DEFAULT_LOG_LEVEL: &str = "info";
