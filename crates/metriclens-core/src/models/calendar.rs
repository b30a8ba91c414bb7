//! Calendar-date resolution for timestamps and KPI dates.

use chrono::NaiveDate;

/// Resolve the calendar date a timestamp string refers to.
///
/// The leading `YYYY-MM-DD` is the date; whatever follows must be empty or a
/// time part introduced by `T` or a space, and is not otherwise interpreted.
/// An offset-qualified timestamp therefore keeps the day as written and is
/// not shifted to UTC.
pub fn calendar_date(raw: &str) -> Option<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(raw.trim(), "%Y-%m-%d").ok()?;
    match rest.chars().next() {
        None | Some('T' | 't' | ' ') => Some(date),
        Some(_) => None,
    }
}
