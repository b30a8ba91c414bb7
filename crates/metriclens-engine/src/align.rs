//! Carry-forward (last observation carried forward) join.
//!
//! The quality series is sparse and timestamped; the KPI series is the date
//! axis. Each KPI date gets the most recent quality score at or before it.
//! Never interpolates and never looks ahead.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use metriclens_core::models::{ChartPoint, KpiPoint, QualityRecord};

/// Calendar date → score for `dimension`, last record processed wins within a date.
///
/// Records whose timestamp cannot be resolved to a date, or that did not
/// record `dimension`, are skipped.
pub fn build_score_lookup(records: &[QualityRecord], dimension: &str) -> BTreeMap<NaiveDate, f64> {
    let mut lookup = BTreeMap::new();
    for record in records {
        let Some(score) = record.score(dimension) else {
            continue;
        };
        match record.calendar_date() {
            Some(date) => {
                lookup.insert(date, score);
            }
            None => warn!(
                timestamp = %record.timestamp,
                "quality record has an unparseable timestamp, skipping"
            ),
        }
    }
    lookup
}

/// Merge both series onto the KPI axis. One point per KPI point, same order.
///
/// The carried score is seeded with the first record's score so KPI dates
/// before the first quality measurement still chart a value.
pub fn carry_forward(
    records: &[QualityRecord],
    kpi_points: &[KpiPoint],
    dimension: &str,
) -> Vec<ChartPoint> {
    let lookup = build_score_lookup(records, dimension);
    let mut carried = records.first().and_then(|record| record.score(dimension));

    kpi_points
        .iter()
        .map(|point| {
            if let Some(score) = point.calendar_date().and_then(|date| lookup.get(&date)) {
                carried = Some(*score);
            }
            ChartPoint {
                date: point.date.clone(),
                quality_score: carried,
                kpi_value: point.value,
            }
        })
        .collect()
}
