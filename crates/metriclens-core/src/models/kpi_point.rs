//! Business KPI observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar_date;

/// One business-metric observation for a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiPoint {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub value: f64,
}

impl KpiPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    /// The parsed calendar date, if `date` is well formed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        calendar_date(&self.date)
    }
}
