//! MetricsSession — owns the four engine inputs and recomputes on every change.
//!
//! The presentation layer pushes new inputs through the setters and reads
//! `state()` afterwards. There is no dependency tracking: each setter calls
//! the engine directly.

use tracing::debug;

use metriclens_core::config::LensConfig;
use metriclens_core::errors::LensResult;
use metriclens_core::models::{CostParameters, KpiPoint, MetricsResult, QualityRecord};

use crate::engine::MetricsEngine;

/// Outcome of the most recent computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No input has been supplied yet.
    #[default]
    NotComputed,
    /// Computed, but one of the series is missing or empty.
    Insufficient,
    Ready(MetricsResult),
}

impl SessionState {
    pub fn result(&self) -> Option<&MetricsResult> {
        match self {
            Self::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        !matches!(self, Self::NotComputed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetricsSession {
    engine: MetricsEngine,
    quality_records: Option<Vec<QualityRecord>>,
    kpi_points: Option<Vec<KpiPoint>>,
    costs: CostParameters,
    state: SessionState,
    revision: u64,
}

impl MetricsSession {
    pub fn new(engine: MetricsEngine, costs: CostParameters) -> Self {
        Self {
            engine,
            costs,
            ..Default::default()
        }
    }

    pub fn from_config(config: &LensConfig) -> Self {
        Self::new(MetricsEngine::new(config.model.clone()), config.costs)
    }

    pub fn set_quality_records(&mut self, records: Vec<QualityRecord>) {
        self.quality_records = Some(records);
        self.recompute();
    }

    pub fn clear_quality_records(&mut self) {
        self.quality_records = None;
        self.recompute();
    }

    pub fn set_kpi_points(&mut self, points: Vec<KpiPoint>) {
        self.kpi_points = Some(points);
        self.recompute();
    }

    pub fn clear_kpi_points(&mut self) {
        self.kpi_points = None;
        self.recompute();
    }

    /// Rejects negative or non-finite values; the session is unchanged on error.
    pub fn set_cost_per_intervention(&mut self, cost: f64) -> LensResult<()> {
        self.set_costs(CostParameters::new(cost, self.costs.hours_per_intervention)?);
        Ok(())
    }

    /// Rejects negative or non-finite values; the session is unchanged on error.
    pub fn set_hours_per_intervention(&mut self, hours: f64) -> LensResult<()> {
        self.set_costs(CostParameters::new(self.costs.cost_per_intervention, hours)?);
        Ok(())
    }

    pub fn set_costs(&mut self, costs: CostParameters) {
        self.costs = costs;
        self.recompute();
    }

    pub fn costs(&self) -> &CostParameters {
        &self.costs
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn result(&self) -> Option<&MetricsResult> {
        self.state.result()
    }

    /// Incremented on every recomputation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        let computed = self.engine.compute(
            self.quality_records.as_deref(),
            self.kpi_points.as_deref(),
            &self.costs,
        );
        self.state = match computed {
            Some(result) => SessionState::Ready(result),
            None => SessionState::Insufficient,
        };
        self.revision += 1;
        debug!(revision = self.revision, ready = self.state.result().is_some(), "session recomputed");
    }
}
