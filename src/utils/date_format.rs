//! Human-readable rendering of content dates.
//!
//! Content records carry dates either as RFC 3339 timestamps
//! (`2024-01-05T14:30:00Z`) or as plain calendar dates (`2024-01-05`).
//! Both forms are accepted; everything is rendered in UTC.

use chrono::{DateTime, NaiveDate, Utc};

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date into UTC.
///
/// Plain dates resolve to midnight UTC. Surrounding whitespace is ignored.
pub fn parse_content_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Renders a content date as `Jan 5, 2024`.
pub fn format_date(value: &str) -> Option<String> {
    parse_content_date(value).map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// Renders a content timestamp as `Jan 5, 2024, 14:30` (UTC).
pub fn format_date_time(value: &str) -> Option<String> {
    parse_content_date(value).map(|dt| dt.format("%b %-d, %Y, %H:%M").to_string())
}
