use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    /// A date range whose end does not fall strictly after its start.
    #[error("End date must be after start date (got {from} to {to})")]
    InvalidRange {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}
