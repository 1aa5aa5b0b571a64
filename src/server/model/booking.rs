//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        error::{internal::InternalError, AppError},
        model::{availability::DateRange, user::User},
        util::parse::parse_date,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub car_id: i32,
    pub user_id: i32,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub period: DateRange,
    pub pickup_time: String,
    pub email: String,
    pub total_days: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Successfully converted booking
    /// - `Err(InternalError::CorruptRecord)` - Stored dropoff is not after pickup
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        let period = DateRange::new(entity.pickup_date, entity.dropoff_date).map_err(|e| {
            InternalError::CorruptRecord {
                entity: "booking",
                id: entity.id,
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            car_id: entity.car_id,
            user_id: entity.user_id,
            pickup_location: entity.pickup_location,
            dropoff_location: entity.dropoff_location,
            period,
            pickup_time: entity.pickup_time,
            email: entity.email,
            total_days: i64::from(entity.total_days),
            total_price: entity.total_price,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            car_id: self.car_id,
            total_days: self.total_days,
            total_price: self.total_price,
            pickup_date: self.period.from(),
            dropoff_date: self.period.to(),
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            pickup_time: self.pickup_time,
            created_at: self.created_at,
        }
    }
}

/// Booking request after parsing, before the date range and availability checks.
#[derive(Debug, Clone, Validate)]
pub struct CreateBookingParams {
    pub car_id: i32,
    pub user_id: i32,
    #[validate(email(message = "Account email is not a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Pickup location is required"))]
    pub pickup_location: String,
    #[validate(length(min = 1, message = "Dropoff location is required"))]
    pub dropoff_location: String,
    pub pickup_date: DateTime<Utc>,
    pub dropoff_date: DateTime<Utc>,
    #[validate(custom(function = "validate_pickup_time"))]
    pub pickup_time: String,
}

impl CreateBookingParams {
    /// Converts a booking DTO for the authenticated user.
    ///
    /// The contact email is taken from the user's account rather than the request body.
    ///
    /// # Returns
    /// - `Ok(CreateBookingParams)` - Dates parsed, text trimmed
    /// - `Err(AppError::BadRequest)` - A date could not be parsed
    pub fn from_dto(dto: CreateBookingDto, user: &User) -> Result<Self, AppError> {
        Ok(Self {
            car_id: dto.car_id,
            user_id: user.id,
            email: user.email.clone(),
            pickup_location: dto.pickup_location.trim().to_string(),
            dropoff_location: dto.dropoff_location.trim().to_string(),
            pickup_date: parse_date("pickupDate", &dto.pickup_date)?,
            dropoff_date: parse_date("dropoffDate", &dto.dropoff_date)?,
            pickup_time: dto.pickup_time.trim().to_string(),
        })
    }
}

/// Fully priced booking ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub car_id: i32,
    pub user_id: i32,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub period: DateRange,
    pub pickup_time: String,
    pub email: String,
    pub total_days: i64,
    pub total_price: f64,
}

/// Accepts `H:MM` or `HH:MM` on a 24-hour clock.
pub fn validate_pickup_time(value: &str) -> Result<(), ValidationError> {
    let valid = value.split_once(':').is_some_and(|(hours, minutes)| {
        let hours_ok = (1..=2).contains(&hours.len())
            && hours.bytes().all(|b| b.is_ascii_digit())
            && hours.parse::<u8>().is_ok_and(|h| h < 24);
        let minutes_ok = minutes.len() == 2
            && minutes.bytes().all(|b| b.is_ascii_digit())
            && minutes.parse::<u8>().is_ok_and(|m| m < 60);
        hours_ok && minutes_ok
    });

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("pickup_time");
        error.message = Some("Pickup time must be in HH:MM format".into());
        Err(error)
    }
}
