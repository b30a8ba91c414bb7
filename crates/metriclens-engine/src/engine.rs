//! MetricsEngine — the single entry point from typed series to `MetricsResult`.

use std::borrow::Cow;

use tracing::debug;

use metriclens_core::config::ModelConfig;
use metriclens_core::models::{CostParameters, KpiPoint, MetricsResult, QualityRecord};

use crate::align;
use crate::roi;

/// Stateless metrics engine. Holds only its model configuration, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    config: ModelConfig,
}

impl MetricsEngine {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Compute the business-value summary.
    ///
    /// Returns `None` when either series is absent or empty: there is nothing
    /// to compute yet, which is not an error. Inputs are never mutated.
    pub fn compute(
        &self,
        quality_records: Option<&[QualityRecord]>,
        kpi_points: Option<&[KpiPoint]>,
        costs: &CostParameters,
    ) -> Option<MetricsResult> {
        let (quality_records, kpi_points) = match (quality_records, kpi_points) {
            (Some(q), Some(k)) if !q.is_empty() && !k.is_empty() => (q, k),
            _ => {
                debug!("insufficient data, skipping metrics computation");
                return None;
            }
        };

        let quality_records = self.ordered_records(quality_records);
        let kpi_points = self.ordered_kpi(kpi_points);

        let (first, last) = (kpi_points.first()?, kpi_points.last()?);
        let breakdown = roi::evaluate(first.value, last.value, costs, &self.config);
        let chart_data =
            align::carry_forward(&quality_records, &kpi_points, &self.config.score_dimension);

        debug!(
            quality_records = quality_records.len(),
            kpi_points = kpi_points.len(),
            improvement_pct = breakdown.kpi_improvement_pct,
            interventions_avoided = breakdown.interventions_avoided,
            total_roi = breakdown.total_roi,
            "computed metrics"
        );

        Some(MetricsResult {
            total_roi: roi::round2(breakdown.total_roi),
            hours_recaptured: roi::round2(breakdown.hours_recaptured),
            manual_interventions_avoided: breakdown.interventions_avoided,
            chart_data,
        })
    }

    fn ordered_records<'a>(&self, records: &'a [QualityRecord]) -> Cow<'a, [QualityRecord]> {
        if !self.config.sort_inputs {
            return Cow::Borrowed(records);
        }
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| {
            a.calendar_date()
                .cmp(&b.calendar_date())
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });
        Cow::Owned(sorted)
    }

    fn ordered_kpi<'a>(&self, points: &'a [KpiPoint]) -> Cow<'a, [KpiPoint]> {
        if !self.config.sort_inputs {
            return Cow::Borrowed(points);
        }
        let mut sorted = points.to_vec();
        sorted.sort_by_key(KpiPoint::calendar_date);
        Cow::Owned(sorted)
    }
}

/// Compute metrics with the default model configuration.
pub fn compute_metrics(
    quality_records: Option<&[QualityRecord]>,
    kpi_points: Option<&[KpiPoint]>,
    costs: &CostParameters,
) -> Option<MetricsResult> {
    MetricsEngine::default().compute(quality_records, kpi_points, costs)
}
