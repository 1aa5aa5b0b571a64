//! Car domain models and parameters.
//!
//! A car owns an ordered list of availability windows. An empty list means the car has no
//! declared windows and is treated as always available (bookings still apply).

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::car::{
        CarDto, CreateAvailabilityWindowDto, CreateCarDto, PaginatedCarsDto, Transmission,
        UpdateCarDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::availability::DateRange,
        util::parse::parse_date,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub mileage: String,
    pub transmission: Transmission,
    pub seats: i32,
    pub luggage: i32,
    pub price_per_day: f64,
    pub features: Vec<String>,
    pub availability: Vec<DateRange>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The car row
    /// - `windows` - Availability rows belonging to the car, in any order
    ///
    /// # Returns
    /// - `Ok(Car)` - Windows sorted by start date
    /// - `Err(InternalError::CorruptRecord)` - Unknown transmission, malformed features
    ///   or a stored window whose end is not after its start
    pub fn from_entity(
        entity: entity::car::Model,
        windows: Vec<entity::car_availability::Model>,
    ) -> Result<Self, InternalError> {
        let corrupt = |reason: String| InternalError::CorruptRecord {
            entity: "car",
            id: entity.id,
            reason,
        };

        let transmission = entity.transmission.parse::<Transmission>().map_err(corrupt)?;
        let features: Vec<String> = serde_json::from_value(entity.features.clone())
            .map_err(|e| corrupt(format!("features: {}", e)))?;

        let mut availability = windows
            .into_iter()
            .map(|w| {
                DateRange::new(w.available_from, w.available_to).map_err(|e| {
                    InternalError::CorruptRecord {
                        entity: "car_availability",
                        id: w.id,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        availability.sort_by_key(|w| w.from());

        Ok(Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            image: entity.image,
            mileage: entity.mileage,
            transmission,
            seats: entity.seats,
            luggage: entity.luggage,
            price_per_day: entity.price_per_day,
            features,
            availability,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            image: self.image,
            mileage: self.mileage,
            transmission: self.transmission,
            seats: self.seats,
            luggage: self.luggage,
            price_per_day: self.price_per_day,
            features: self.features,
            availability: self.availability.into_iter().map(DateRange::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

/// A page of cars plus the total number matching the filter.
#[derive(Debug, Clone)]
pub struct PaginatedCars {
    pub cars: Vec<Car>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
}

impl PaginatedCars {
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            cars: self.cars.into_iter().map(Car::into_dto).collect(),
            total: self.total,
            page: self.page,
            entries: self.entries,
        }
    }
}

/// Optional filters for the public car listing.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    /// Case-insensitive substring of the brand.
    pub brand: Option<String>,
    pub transmission: Option<Transmission>,
    pub min_seats: Option<i32>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateCarParams {
    #[validate(length(min = 1, max = 50, message = "Car name must be between 1 and 50 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
    #[validate(length(min = 1, message = "Mileage is required"))]
    pub mileage: String,
    pub transmission: Transmission,
    #[validate(range(min = 2, message = "Seats must be at least 2"))]
    pub seats: i32,
    #[validate(range(min = 1, message = "Luggage must be at least 1"))]
    pub luggage: i32,
    #[validate(range(min = 0.0, message = "Price per day cannot be negative"))]
    pub price_per_day: f64,
    pub features: Vec<String>,
    pub availability: Vec<DateRange>,
}

impl CreateCarParams {
    /// Converts a create DTO, trimming text fields and parsing availability windows.
    ///
    /// # Returns
    /// - `Ok(CreateCarParams)` - Parsed parameters, not yet validated
    /// - `Err(AppError::BadRequest)` - A window date could not be parsed
    /// - `Err(AppError::AvailabilityErr)` - A window ends on or before its start
    pub fn from_dto(dto: CreateCarDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            brand: dto.brand.trim().to_string(),
            image: dto.image.trim().to_string(),
            mileage: dto.mileage.trim().to_string(),
            transmission: dto.transmission,
            seats: dto.seats,
            luggage: dto.luggage,
            price_per_day: dto.price_per_day,
            features: trim_features(dto.features),
            availability: parse_windows(dto.availability)?,
        })
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCarParams {
    #[validate(length(min = 1, max = 50, message = "Car name must be between 1 and 50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Brand cannot be empty"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: Option<String>,
    #[validate(length(min = 1, message = "Mileage cannot be empty"))]
    pub mileage: Option<String>,
    pub transmission: Option<Transmission>,
    #[validate(range(min = 2, message = "Seats must be at least 2"))]
    pub seats: Option<i32>,
    #[validate(range(min = 1, message = "Luggage must be at least 1"))]
    pub luggage: Option<i32>,
    #[validate(range(min = 0.0, message = "Price per day cannot be negative"))]
    pub price_per_day: Option<f64>,
    pub features: Option<Vec<String>>,
    /// Replaces every existing window when present.
    pub availability: Option<Vec<DateRange>>,
}

impl UpdateCarParams {
    pub fn from_dto(dto: UpdateCarDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|v| v.trim().to_string()),
            brand: dto.brand.map(|v| v.trim().to_string()),
            image: dto.image.map(|v| v.trim().to_string()),
            mileage: dto.mileage.map(|v| v.trim().to_string()),
            transmission: dto.transmission,
            seats: dto.seats,
            luggage: dto.luggage,
            price_per_day: dto.price_per_day,
            features: dto.features.map(trim_features),
            availability: dto.availability.map(parse_windows).transpose()?,
        })
    }
}

fn trim_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

fn parse_windows(windows: Vec<CreateAvailabilityWindowDto>) -> Result<Vec<DateRange>, AppError> {
    windows
        .into_iter()
        .map(|w| {
            let from = parse_date("availability.from", &w.from)?;
            let to = parse_date("availability.to", &w.to)?;
            Ok(DateRange::new(from, to)?)
        })
        .collect()
}
