use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::AppError;

/// Parses a calendar date or timestamp submitted by a client.
///
/// Accepts either a plain `YYYY-MM-DD` date, interpreted as midnight UTC, or a full
/// RFC 3339 timestamp which is converted to UTC.
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed instant
/// - `Err(AppError::BadRequest)` - Value is neither a date nor an RFC 3339 timestamp
pub fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid {}: expected YYYY-MM-DD or an RFC 3339 timestamp, got '{}'",
                field, value
            ))
        })
}
