//! Experiment evaluation records (the technical quality series).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::calendar_date;

/// One evaluation run: a timestamp plus named numeric scores.
///
/// Experiment exports name the timestamp `created`; both spellings are
/// accepted on input. Only `timestamp` is required. `id` and `name` accept any
/// scalar and keep it as text; score entries that are not numbers (e.g. `null`
/// for a scorer that did not run) are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "scalar_text")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "scalar_text")]
    pub name: Option<String>,
    /// ISO-8601 datetime of the run.
    #[serde(alias = "created")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "numeric_scores")]
    pub scores: BTreeMap<String, f64>,
}

impl QualityRecord {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            timestamp: timestamp.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Builder-style score insertion.
    pub fn with_score(mut self, dimension: impl Into<String>, score: f64) -> Self {
        self.scores.insert(dimension.into(), score);
        self
    }

    /// Score for one dimension, if the run recorded it.
    pub fn score(&self, dimension: &str) -> Option<f64> {
        self.scores.get(dimension).copied()
    }

    /// Calendar date of the run's timestamp.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        calendar_date(&self.timestamp)
    }
}

fn numeric_scores<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(raw) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| value.as_f64().map(|score| (name, score)))
        .collect())
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}
