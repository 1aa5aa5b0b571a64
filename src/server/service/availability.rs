//! Availability engine.
//!
//! Pure decision logic for whether a car can be rented over a requested range, given the
//! car's declared availability windows and its existing bookings. No I/O happens here;
//! callers load windows and bookings and serialize decisions per car.

use chrono::{DateTime, Utc};

use crate::server::{error::availability::AvailabilityError, model::availability::DateRange};

/// Decides whether `[from, to)` can be booked.
///
/// The range is available when both hold:
/// - `windows` is empty, or at least one window fully contains the range
/// - no entry in `booked` overlaps the range
///
/// # Arguments
/// - `windows` - The car's declared availability windows; empty means unrestricted
/// - `from` - Requested start (inclusive)
/// - `to` - Requested end (exclusive)
/// - `booked` - Periods of existing bookings for the same car
///
/// # Returns
/// - `Ok(bool)` - Whether the range is free
/// - `Err(AvailabilityError::InvalidRange)` - `to <= from`
pub fn is_available(
    windows: &[DateRange],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    booked: &[DateRange],
) -> Result<bool, AvailabilityError> {
    let requested = DateRange::new(from, to)?;

    Ok(is_range_available(windows, &requested, booked))
}

/// Same decision as [`is_available`] for an already validated range.
pub fn is_range_available(windows: &[DateRange], requested: &DateRange, booked: &[DateRange]) -> bool {
    let inside_window = windows.is_empty() || windows.iter().any(|w| w.contains(requested));

    inside_window && !booked.iter().any(|b| b.overlaps(requested))
}
