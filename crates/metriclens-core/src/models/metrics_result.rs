//! Engine output consumed by the presentation layer.

use serde::{Deserialize, Serialize};

/// Business-value summary plus the merged chart series.
///
/// Field names serialize to the camelCase keys the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Return on investment, percent, rounded to 2 decimals.
    #[serde(rename = "totalROI")]
    pub total_roi: f64,
    /// Rounded to 2 decimals.
    #[serde(rename = "hoursRecaptured")]
    pub hours_recaptured: f64,
    #[serde(rename = "manualInterventionsAvoided")]
    pub manual_interventions_avoided: u64,
    /// One point per input KPI point, in input order.
    #[serde(rename = "chartData")]
    pub chart_data: Vec<ChartPoint>,
}

/// One date on the merged quality/KPI axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    /// Carried-forward quality score; `None` when no score has been seen yet.
    #[serde(rename = "qualityScore")]
    pub quality_score: Option<f64>,
    #[serde(rename = "kpiValue")]
    pub kpi_value: f64,
}
