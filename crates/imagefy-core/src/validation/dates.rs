use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::ValidationError;

/// Parse a caller-supplied date.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00-03:00`), a naive
/// `YYYY-MM-DDTHH:MM:SS` read as UTC, or a bare `YYYY-MM-DD` at UTC midnight.
pub fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Some(naive) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(ValidationError::new(field, "must be a valid date"))
}

pub fn validate_date_order(
    start_field: &'static str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::new(start_field, "must not be after endAt"));
    }
    Ok(())
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`, the form the API expects for event bounds.
pub fn to_iso_string(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
