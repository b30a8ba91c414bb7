//! KPI CSV parsing.
//!
//! Format: first non-blank line is a comma-separated header containing
//! `date` and `value` (exact, case-sensitive). Data rows are split on commas
//! positionally; quoted fields are not supported. A leading UTF-8 byte-order
//! mark (common in spreadsheet exports) is ignored.

use metriclens_core::models::KpiPoint;

use crate::errors::{IngestError, IngestResult};

pub fn parse_kpi_csv(text: &str) -> IngestResult<Vec<KpiPoint>> {
    // (1-based line number, line) for every non-blank line.
    let rows: Vec<(usize, &str)> = crate::strip_bom(text)
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    let Some(((_, header), data)) = rows.split_first() else {
        return Err(IngestError::TooFewRows);
    };
    if data.is_empty() {
        return Err(IngestError::TooFewRows);
    }

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let (Some(date_idx), Some(value_idx)) = (
        columns.iter().position(|c| *c == "date"),
        columns.iter().position(|c| *c == "value"),
    ) else {
        return Err(IngestError::MissingColumns);
    };
    let expected = date_idx.max(value_idx) + 1;

    data.iter()
        .map(|&(line, row)| {
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            let (Some(date), Some(raw_value)) = (fields.get(date_idx), fields.get(value_idx)) else {
                return Err(IngestError::InvalidRow {
                    line,
                    expected,
                    found: fields.len(),
                });
            };
            let value = raw_value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| IngestError::InvalidValue {
                    line,
                    value: raw_value.to_string(),
                })?;
            Ok(KpiPoint::new(*date, value))
        })
        .collect()
}
