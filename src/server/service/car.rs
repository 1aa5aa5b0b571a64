use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{booking::BookingRepository, car::CarRepository},
    error::AppError,
    model::{
        availability::DateRange,
        car::{Car, CarFilter, CreateCarParams, PaginatedCars, UpdateCarParams},
    },
    service::{availability, lock::CarLocks},
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a CarLocks,
}

impl<'a> CarService<'a> {
    /// `locks` is the registry shared with [`BookingService`](super::booking::BookingService).
    pub fn new(db: &'a DatabaseConnection, locks: &'a CarLocks) -> Self {
        Self { db, locks }
    }

    /// Gets a filtered page of cars.
    pub async fn get_paginated(
        &self,
        filter: CarFilter,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedCars, AppError> {
        let (cars, total) = CarRepository::new(self.db)
            .get_paginated(&filter, page, entries)
            .await?;

        Ok(PaginatedCars {
            cars,
            total,
            page,
            entries,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Car, AppError> {
        CarRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", id)))
    }

    /// Lists cars that could be booked for the whole of `[from, to)`.
    ///
    /// Candidates come from the window filter in the database; the availability engine
    /// then re-checks each one against its windows and the bookings overlapping the range.
    pub async fn get_available(&self, range: DateRange) -> Result<Vec<Car>, AppError> {
        let cars = CarRepository::new(self.db).find_available(&range).await?;

        let mut booked: HashMap<i32, Vec<DateRange>> = HashMap::new();
        for booking in BookingRepository::new(self.db)
            .get_overlapping(&range)
            .await?
        {
            booked.entry(booking.car_id).or_default().push(booking.period);
        }

        Ok(cars
            .into_iter()
            .filter(|car| {
                let car_bookings = booked.get(&car.id).map(Vec::as_slice).unwrap_or(&[]);
                availability::is_range_available(&car.availability, &range, car_bookings)
            })
            .collect())
    }

    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        params.validate()?;

        let car = CarRepository::new(self.db).create(params).await?;
        tracing::info!(car_id = car.id, "Created car {}", car.name);

        Ok(car)
    }

    /// Creates several cars in one transaction.
    ///
    /// Every entry is validated before anything is written.
    ///
    /// # Returns
    /// - `Ok(Vec<Car>)` - All created cars in input order
    /// - `Err(AppError::BadRequest)` - Empty input
    /// - `Err(AppError::ValidationErr)` - At least one entry failed validation
    pub async fn create_many(&self, params: Vec<CreateCarParams>) -> Result<Vec<Car>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "At least one car is required".to_string(),
            ));
        }

        for car_params in &params {
            car_params.validate()?;
        }

        let cars = CarRepository::new(self.db).create_many(params).await?;
        tracing::info!("Created {} cars in bulk", cars.len());

        Ok(cars)
    }

    pub async fn update(&self, id: i32, params: UpdateCarParams) -> Result<Car, AppError> {
        params.validate()?;

        let _guard = self.locks.acquire(id).await;

        CarRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let _guard = self.locks.acquire(id).await;

        if !CarRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Car {} not found", id)));
        }

        tracing::info!(car_id = id, "Deleted car");

        Ok(())
    }
}
