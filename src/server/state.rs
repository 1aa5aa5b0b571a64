//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone and shares its underlying
//! resource between clones.

use sea_orm::DatabaseConnection;

use super::service::{
    admin::code::AdminCodeService, lock::CarLocks, notification::BookingNotifier,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Service for the one-time code that lets the first user become admin.
    pub admin_code_service: AdminCodeService,

    /// Per-car locks serializing the availability check and insert of bookings.
    pub booking_locks: CarLocks,

    /// Sends booking confirmations to renters and the operator.
    pub notifier: BookingNotifier,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        booking_locks: CarLocks,
        notifier: BookingNotifier,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            booking_locks,
            notifier,
        }
    }
}
