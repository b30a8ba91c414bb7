//! Async file loading. Both files of a sample set are read concurrently and
//! handed over fully parsed; callers never see partial input.

use std::path::Path;

use tracing::info;

use metriclens_core::models::{KpiPoint, QualityRecord};

use crate::errors::{IngestError, IngestResult};
use crate::experiments::parse_experiments_json;
use crate::kpi_csv::parse_kpi_csv;

pub const SAMPLE_EXPERIMENTS_FILE: &str = "sample.json";
pub const SAMPLE_KPI_FILE: &str = "sample.csv";

/// Both series of a sample data set.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub quality_records: Vec<QualityRecord>,
    pub kpi_points: Vec<KpiPoint>,
}

pub async fn read_experiments_file(path: impl AsRef<Path>) -> IngestResult<Vec<QualityRecord>> {
    let text = read_text(path.as_ref()).await?;
    parse_experiments_json(&text)
}

pub async fn read_kpi_file(path: impl AsRef<Path>) -> IngestResult<Vec<KpiPoint>> {
    let text = read_text(path.as_ref()).await?;
    parse_kpi_csv(&text)
}

/// Load `sample.json` and `sample.csv` from `dir` in parallel.
pub async fn load_sample_data(dir: impl AsRef<Path>) -> IngestResult<SampleData> {
    let dir = dir.as_ref();
    let (quality_records, kpi_points) = tokio::try_join!(
        read_experiments_file(dir.join(SAMPLE_EXPERIMENTS_FILE)),
        read_kpi_file(dir.join(SAMPLE_KPI_FILE)),
    )?;

    info!(
        dir = %dir.display(),
        quality_records = quality_records.len(),
        kpi_points = kpi_points.len(),
        "loaded sample data"
    );

    Ok(SampleData {
        quality_records,
        kpi_points,
    })
}

async fn read_text(path: &Path) -> IngestResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })
}
