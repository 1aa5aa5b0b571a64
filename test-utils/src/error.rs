use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database, creating tables or seeding rows failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Migrating the session table failed.
    #[error("session store: {0}")]
    Session(String),

    /// A helper needed part of the context that was never set up.
    #[error("test context has no {0}")]
    NotInitialized(&'static str),
}
