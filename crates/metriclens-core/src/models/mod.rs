mod calendar;
mod cost_parameters;
mod kpi_point;
mod metrics_result;
mod quality_record;

pub use calendar::calendar_date;
pub use cost_parameters::CostParameters;
pub use kpi_point::KpiPoint;
pub use metrics_result::{ChartPoint, MetricsResult};
pub use quality_record::QualityRecord;
