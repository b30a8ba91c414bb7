//! # metriclens-ingest
//!
//! Turns uploaded text into the typed series the engine consumes.
//!
//! - `experiments` — experiment-export JSON → `QualityRecord`s
//! - `kpi_csv` — `date,value` CSV → `KpiPoint`s
//! - `loader` — async file reads and concurrent sample-data loading
//! - `errors` — `IngestError` (format and I/O failures)

pub mod errors;
pub mod experiments;
pub mod kpi_csv;
pub mod loader;

pub use errors::{IngestError, IngestResult};
pub use experiments::parse_experiments_json;
pub use kpi_csv::parse_kpi_csv;
pub use loader::{load_sample_data, read_experiments_file, read_kpi_file, SampleData};

/// Drop a leading UTF-8 byte-order mark.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
