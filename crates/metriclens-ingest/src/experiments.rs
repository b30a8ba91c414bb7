//! Experiment-export JSON parsing.

use serde_json::Value;

use metriclens_core::models::QualityRecord;

use crate::errors::{IngestError, IngestResult};

/// Parse an experiment export. The top-level value must be an array; each
/// element is read as a `QualityRecord` with no further schema checks.
/// A leading UTF-8 byte-order mark is ignored.
pub fn parse_experiments_json(text: &str) -> IngestResult<Vec<QualityRecord>> {
    let text = crate::strip_bom(text);
    let items = match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items,
        other => {
            return Err(IngestError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| IngestError::InvalidRecord { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
