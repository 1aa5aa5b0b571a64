use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    error::TestError,
    factory::{booking::BookingFactory, user::create_user},
};

/// Sessions in tests expire on the same inactivity window the server uses.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// In-memory test environment returned by [`TestBuilder::build`](crate::builder::TestBuilder::build).
///
/// The database is opened by the builder; the session is created on first use and is
/// stored in the same SQLite database.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

/// A booking seeded by [`TestContext::seed_booking`] along with the renter who holds it.
pub struct SeededBooking {
    pub renter: entity::user::Model,
    pub booking: entity::booking::Model,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the connection, opening `sqlite::memory:` if needed.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.connection()
    }

    fn connection(&self) -> Result<&DatabaseConnection, TestError> {
        self.db.as_ref().ok_or(TestError::NotInitialized("database"))
    }

    /// Runs the CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, migrating the session table on first call.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.database().await?.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::Session(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
            ));
        }

        self.session
            .as_ref()
            .ok_or(TestError::NotInitialized("session"))
    }

    /// Borrows the connection and session together for auth tests.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            (None, _) => Err(TestError::NotInitialized("database")),
            (_, None) => Err(TestError::NotInitialized("session")),
        }
    }

    /// Books `car_id` over `[pickup, dropoff)` for a freshly created renter.
    ///
    /// Needs the tables from `with_booking_tables`. Windows on the car are not checked,
    /// so this can also seed rows the booking service itself would refuse.
    pub async fn seed_booking(
        &self,
        car_id: i32,
        pickup: DateTime<Utc>,
        dropoff: DateTime<Utc>,
    ) -> Result<SeededBooking, TestError> {
        let db = self.connection()?;

        let renter = create_user(db).await?;
        let booking = BookingFactory::new(db, car_id, renter.id)
            .dates(pickup, dropoff)
            .build()
            .await?;

        Ok(SeededBooking { renter, booking })
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
