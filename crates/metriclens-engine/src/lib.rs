//! # metriclens-engine
//!
//! Derives a business-value summary from a technical quality series and a
//! business KPI series.
//!
//! - `align` — carry-forward join of quality scores onto the KPI date axis
//! - `roi` — KPI improvement → interventions avoided → ROI / hours model
//! - `engine` — `MetricsEngine` and the `compute_metrics` entry point
//! - `session` — explicit recomputation when any engine input changes

pub mod align;
pub mod engine;
pub mod roi;
pub mod session;

pub use engine::{compute_metrics, MetricsEngine};
pub use roi::RoiBreakdown;
pub use session::{MetricsSession, SessionState};
