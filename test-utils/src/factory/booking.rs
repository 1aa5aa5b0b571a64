//! Booking factory for creating test booking entities.
//!
//! Inserts rows directly, bypassing the booking service's availability check, so tests
//! can arrange any set of existing bookings.

use crate::factory::helpers::day;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, car.id, user.id)
///     .dates(day(2024, 6, 12), day(2024, 6, 14))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: i32,
    user_id: i32,
    pickup_date: DateTime<Utc>,
    dropoff_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - dates: 2024-06-01 to 2024-06-03
    /// - locations: `"Airport"` / `"Downtown"`, pickup time `"10:00"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, car_id: i32, user_id: i32) -> Self {
        Self {
            db,
            car_id,
            user_id,
            pickup_date: day(2024, 6, 1),
            dropoff_date: day(2024, 6, 3),
            created_at: Utc::now(),
        }
    }

    /// Sets the pickup and dropoff dates.
    pub fn dates(mut self, pickup_date: DateTime<Utc>, dropoff_date: DateTime<Utc>) -> Self {
        self.pickup_date = pickup_date;
        self.dropoff_date = dropoff_date;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let total_days = (self.dropoff_date - self.pickup_date).num_days().max(1) as i32;

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            car_id: ActiveValue::Set(self.car_id),
            user_id: ActiveValue::Set(self.user_id),
            pickup_location: ActiveValue::Set("Airport".to_string()),
            dropoff_location: ActiveValue::Set("Downtown".to_string()),
            pickup_date: ActiveValue::Set(self.pickup_date),
            dropoff_date: ActiveValue::Set(self.dropoff_date),
            pickup_time: ActiveValue::Set("10:00".to_string()),
            email: ActiveValue::Set(format!("renter{}@example.com", self.user_id)),
            total_days: ActiveValue::Set(total_days),
            total_price: ActiveValue::Set(total_days as f64 * 50.0),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default dates for the given car and user.
///
/// Shorthand for `BookingFactory::new(db, car_id, user_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    car_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, car_id, user_id).build().await
}
