use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored row could not be converted into its domain model.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored {entity} {id} is corrupt: {reason}")]
    CorruptRecord {
        /// Table the row was read from
        entity: &'static str,
        /// Primary key of the row
        id: i32,
        /// What failed to convert
        reason: String,
    },

    /// Password hashing or verification failed for a reason other than a mismatch.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task was cancelled or panicked.
    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// The rate limiter configuration was rejected by the governor builder.
    #[error("Invalid rate limit configuration")]
    RateLimitConfig,
}
