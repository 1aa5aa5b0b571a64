//! Booking data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::server::{
    error::AppError,
    model::{
        availability::DateRange,
        booking::{Booking, NewBooking},
    },
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a priced booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The stored booking with its ID and creation time
    /// - `Err(AppError::Conflict)` - The car already has a booking for the identical range
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let result = entity::booking::ActiveModel {
            car_id: ActiveValue::Set(booking.car_id),
            user_id: ActiveValue::Set(booking.user_id),
            pickup_location: ActiveValue::Set(booking.pickup_location),
            dropoff_location: ActiveValue::Set(booking.dropoff_location),
            pickup_date: ActiveValue::Set(booking.period.from()),
            dropoff_date: ActiveValue::Set(booking.period.to()),
            pickup_time: ActiveValue::Set(booking.pickup_time),
            email: ActiveValue::Set(booking.email),
            total_days: ActiveValue::Set(booking.total_days as i32),
            total_price: ActiveValue::Set(booking.total_price),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Booking::from_entity(entity)?),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(
                    "Car not available for selected dates".to_string(),
                )),
                _ => Err(err.into()),
            },
        }
    }

    /// Gets every booking for a car, ordered by pickup date.
    pub async fn get_by_car(&self, car_id: i32) -> Result<Vec<Booking>, AppError> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::CarId.eq(car_id))
            .order_by_asc(entity::booking::Column::PickupDate)
            .all(self.db)
            .await?;

        to_domain(entities)
    }

    /// Gets a user's bookings, most recently created first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        to_domain(entities)
    }

    /// Gets bookings on any car whose period overlaps `range`.
    pub async fn get_overlapping(&self, range: &DateRange) -> Result<Vec<Booking>, AppError> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::PickupDate.lt(range.to()))
            .filter(entity::booking::Column::DropoffDate.gt(range.from()))
            .all(self.db)
            .await?;

        to_domain(entities)
    }
}

fn to_domain(entities: Vec<entity::booking::Model>) -> Result<Vec<Booking>, AppError> {
    entities
        .into_iter()
        .map(|e| Booking::from_entity(e).map_err(AppError::from))
        .collect()
}
