//! # metriclens-core
//!
//! Foundation crate for MetricLens.
//! Defines the data model, configuration, errors, and tracing setup shared by
//! the engine and ingestion crates. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{LensConfig, ModelConfig, ObservabilityConfig};
pub use errors::{ConfigError, ErrorCode, LensError, LensResult};
pub use models::{ChartPoint, CostParameters, KpiPoint, MetricsResult, QualityRecord};
