//! Half-open date ranges used for rental periods and availability windows.

use chrono::{DateTime, Utc};

use crate::{model::car::AvailabilityWindowDto, server::error::availability::AvailabilityError};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A non-empty half-open interval `[from, to)` in UTC.
///
/// Construction through [`DateRange::new`] guarantees `from < to`, so every range held
/// by the domain is valid. Back-to-back ranges that share an endpoint do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range, rejecting empty and reversed intervals.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - `from` is strictly before `to`
    /// - `Err(AvailabilityError::InvalidRange)` - `to <= from`
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, AvailabilityError> {
        if from >= to {
            return Err(AvailabilityError::InvalidRange { from, to });
        }

        Ok(Self { from, to })
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Returns true when the two ranges share at least one instant.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from < other.to && other.from < self.to
    }

    /// Returns true when `other` lies entirely inside this range.
    pub fn contains(&self, other: &DateRange) -> bool {
        self.from <= other.from && other.to <= self.to
    }

    /// Number of billable days, rounding any partial day up.
    ///
    /// Always at least 1 since the range is non-empty.
    pub fn billable_days(&self) -> i64 {
        let millis = (self.to - self.from).num_milliseconds();
        ((millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY).max(1)
    }

    pub fn into_dto(self) -> AvailabilityWindowDto {
        AvailabilityWindowDto {
            from: self.from,
            to: self.to,
        }
    }
}
