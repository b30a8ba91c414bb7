//! ROI / intervention model.
//!
//! KPI improvement (percent) is scaled linearly into an estimated count of
//! avoided manual interventions, which is then priced in money and hours and
//! compared against the investment.

use serde::{Deserialize, Serialize};

use metriclens_core::config::ModelConfig;
use metriclens_core::models::CostParameters;

/// Every intermediate value of one ROI evaluation, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiBreakdown {
    pub kpi_improvement_pct: f64,
    pub interventions_avoided: u64,
    pub cost_savings: f64,
    pub hours_recaptured: f64,
    pub total_investment: f64,
    pub total_roi: f64,
}

/// Percent change from `initial` to `last`. A zero baseline yields 0.
pub fn kpi_improvement_pct(initial: f64, last: f64) -> f64 {
    if initial == 0.0 {
        return 0.0;
    }
    ((last - initial) / initial) * 100.0
}

/// Interventions avoided for an improvement. Regressions floor at 0.
pub fn interventions_avoided(improvement_pct: f64, per_point: f64) -> u64 {
    let scaled = (improvement_pct * per_point).round();
    if scaled.is_finite() && scaled > 0.0 {
        scaled as u64
    } else {
        0
    }
}

/// ROI in percent. A non-positive investment yields 0.
pub fn return_on_investment(cost_savings: f64, total_investment: f64) -> f64 {
    if total_investment > 0.0 {
        ((cost_savings - total_investment) / total_investment) * 100.0
    } else {
        0.0
    }
}

/// Run the whole model for the first and last KPI values.
pub fn evaluate(
    initial_kpi: f64,
    final_kpi: f64,
    costs: &CostParameters,
    model: &ModelConfig,
) -> RoiBreakdown {
    let kpi_improvement_pct = kpi_improvement_pct(initial_kpi, final_kpi);
    let interventions = interventions_avoided(kpi_improvement_pct, model.interventions_per_point);
    let cost_savings = interventions as f64 * costs.cost_per_intervention;
    let hours_recaptured = interventions as f64 * costs.hours_per_intervention;

    RoiBreakdown {
        kpi_improvement_pct,
        interventions_avoided: interventions,
        cost_savings,
        hours_recaptured,
        total_investment: model.total_investment,
        total_roi: return_on_investment(cost_savings, model.total_investment),
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
