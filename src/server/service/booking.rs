//! Booking orchestration.
//!
//! Validates a request, checks it against the car's windows and bookings while holding
//! the car's lock, prices it, persists it and hands it to the notifier.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{booking::BookingRepository, car::CarRepository},
    error::AppError,
    model::{
        availability::DateRange,
        booking::{Booking, CreateBookingParams, NewBooking},
    },
    service::{availability, lock::CarLocks, notification::BookingNotifier},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a CarLocks,
    notifier: &'a BookingNotifier,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a CarLocks, notifier: &'a BookingNotifier) -> Self {
        Self {
            db,
            locks,
            notifier,
        }
    }

    /// Creates a booking if the car is free for the requested range.
    ///
    /// The car and its bookings are read and the insert is made under the car's lock, so
    /// concurrent requests for overlapping ranges on one car result in exactly one booking
    /// and window edits to the car wait for the decision.
    /// Notification emails are dispatched after the booking is stored.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Stored booking with `total_days` and `total_price`
    /// - `Err(AppError::ValidationErr)` - Missing locations or malformed pickup time
    /// - `Err(AppError::AvailabilityErr)` - Dropoff is not after pickup
    /// - `Err(AppError::NotFound)` - Car does not exist
    /// - `Err(AppError::Conflict)` - Range is outside the car's windows or already booked
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        params.validate()?;
        let period = DateRange::new(params.pickup_date, params.dropoff_date)?;

        let booking_repo = BookingRepository::new(self.db);

        let (booking, car) = {
            let _guard = self.locks.acquire(params.car_id).await;

            let car = CarRepository::new(self.db)
                .get_by_id(params.car_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Car {} not found", params.car_id)))?;

            let booked: Vec<DateRange> = booking_repo
                .get_by_car(car.id)
                .await?
                .into_iter()
                .map(|b| b.period)
                .collect();

            if !availability::is_available(&car.availability, period.from(), period.to(), &booked)? {
                return Err(AppError::Conflict(
                    "Car not available for selected dates".to_string(),
                ));
            }

            let total_days = period.billable_days();

            let booking = booking_repo
                .create(NewBooking {
                    car_id: car.id,
                    user_id: params.user_id,
                    pickup_location: params.pickup_location,
                    dropoff_location: params.dropoff_location,
                    period,
                    pickup_time: params.pickup_time,
                    email: params.email,
                    total_days,
                    total_price: total_days as f64 * car.price_per_day,
                })
                .await?;

            (booking, car)
        };

        tracing::info!(
            booking_id = booking.id,
            car_id = car.id,
            user_id = booking.user_id,
            "Created booking"
        );

        self.notifier.booking_created(&booking, &car);

        Ok(booking)
    }

    /// Lists a user's bookings, most recently created first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        BookingRepository::new(self.db).get_by_user(user_id).await
    }

    /// Checks whether a car could be booked for a range without creating anything.
    ///
    /// Uses the same decision as [`BookingService::create`], so a positive answer is only
    /// advisory; a concurrent booking may still take the range first.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the range is currently free
    /// - `Err(AppError::AvailabilityErr)` - `to <= from`
    /// - `Err(AppError::NotFound)` - Car does not exist
    pub async fn check_availability(
        &self,
        car_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let period = DateRange::new(from, to)?;

        let car = CarRepository::new(self.db)
            .get_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", car_id)))?;

        let booked: Vec<DateRange> = BookingRepository::new(self.db)
            .get_by_car(car.id)
            .await?
            .into_iter()
            .map(|b| b.period)
            .collect();

        Ok(availability::is_range_available(
            &car.availability,
            &period,
            &booked,
        ))
    }
}
