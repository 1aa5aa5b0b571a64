//! Car data repository.
//!
//! Cars and their availability windows are written together inside a transaction so a
//! car is never visible with a partial window list.

use std::collections::HashMap;

use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::{
        availability::DateRange,
        car::{Car, CarFilter, CreateCarParams, UpdateCarParams},
    },
};

type WindowsByCar = HashMap<i32, Vec<entity::car_availability::Model>>;

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a car with its availability windows in one transaction.
    ///
    /// # Returns
    /// - `Ok(Car)` - Created car with windows sorted by start
    /// - `Err(AppError::DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        let txn = self.db.begin().await?;
        let car = insert_car(&txn, params).await?;
        txn.commit().await?;

        Ok(car)
    }

    /// Inserts several cars atomically; either all are created or none.
    pub async fn create_many(&self, params: Vec<CreateCarParams>) -> Result<Vec<Car>, AppError> {
        let txn = self.db.begin().await?;

        let mut cars = Vec::with_capacity(params.len());
        for car_params in params {
            cars.push(insert_car(&txn, car_params).await?);
        }

        txn.commit().await?;

        Ok(cars)
    }

    /// Gets a car by ID together with its availability windows.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        let Some(car) = entity::prelude::Car::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let windows = entity::prelude::CarAvailability::find()
            .filter(entity::car_availability::Column::CarId.eq(id))
            .all(self.db)
            .await?;

        Ok(Some(Car::from_entity(car, windows)?))
    }

    /// Gets one page of cars matching the filter, ordered by ID.
    ///
    /// # Arguments
    /// - `filter` - Optional brand, transmission, seat and price constraints
    /// - `page` - Zero-based page index
    /// - `entries` - Page size, must be non-zero
    ///
    /// # Returns
    /// - `Ok((cars, total))` - The page and the total number of matching cars
    pub async fn get_paginated(
        &self,
        filter: &CarFilter,
        page: u64,
        entries: u64,
    ) -> Result<(Vec<Car>, u64), AppError> {
        let mut query = entity::prelude::Car::find();

        if let Some(brand) = &filter.brand {
            query = query.filter(entity::car::Column::Brand.contains(brand));
        }
        if let Some(transmission) = filter.transmission {
            query = query.filter(entity::car::Column::Transmission.eq(transmission.as_str()));
        }
        if let Some(min_seats) = filter.min_seats {
            query = query.filter(entity::car::Column::Seats.gte(min_seats));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::car::Column::PricePerDay.lte(max_price));
        }

        let paginator = query
            .order_by_asc(entity::car::Column::Id)
            .paginate(self.db, entries);

        let total = paginator.num_items().await?;
        let cars = paginator.fetch_page(page).await?;

        let car_ids = cars.iter().map(|c| c.id).collect();
        let mut windows = load_windows(self.db, car_ids).await?;

        let cars = cars
            .into_iter()
            .map(|car| {
                let car_windows = windows.remove(&car.id).unwrap_or_default();
                Car::from_entity(car, car_windows)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((cars, total))
    }

    /// Gets every car with its windows, ordered by ID.
    /// Gets the cars whose windows allow the whole of `range`.
    ///
    /// A car qualifies when it declares no windows at all or when one window contains
    /// the range. Existing bookings are not considered here.
    pub async fn find_available(&self, range: &DateRange) -> Result<Vec<Car>, AppError> {
        use entity::car_availability::Column as Window;

        let windowed = Query::select()
            .column(Window::CarId)
            .from(entity::prelude::CarAvailability)
            .to_owned();

        let containing = Query::select()
            .column(Window::CarId)
            .from(entity::prelude::CarAvailability)
            .and_where(Window::AvailableFrom.lte(range.from()))
            .and_where(Window::AvailableTo.gte(range.to()))
            .to_owned();

        let cars = entity::prelude::Car::find()
            .filter(
                Condition::any()
                    .add(entity::car::Column::Id.not_in_subquery(windowed))
                    .add(entity::car::Column::Id.in_subquery(containing)),
            )
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        let car_ids = cars.iter().map(|c| c.id).collect();
        let mut windows = load_windows(self.db, car_ids).await?;

        let cars = cars
            .into_iter()
            .map(|car| {
                let car_windows = windows.remove(&car.id).unwrap_or_default();
                Car::from_entity(car, car_windows)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(cars)
    }

    /// Applies a partial update, replacing all windows when new ones are given.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Updated car
    /// - `Ok(None)` - No car with that ID
    pub async fn update(&self, id: i32, params: UpdateCarParams) -> Result<Option<Car>, AppError> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Car::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::car::ActiveModel = existing.clone().into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(brand) = params.brand {
            active.brand = ActiveValue::Set(brand);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(mileage) = params.mileage {
            active.mileage = ActiveValue::Set(mileage);
        }
        if let Some(transmission) = params.transmission {
            active.transmission = ActiveValue::Set(transmission.as_str().to_string());
        }
        if let Some(seats) = params.seats {
            active.seats = ActiveValue::Set(seats);
        }
        if let Some(luggage) = params.luggage {
            active.luggage = ActiveValue::Set(luggage);
        }
        if let Some(price_per_day) = params.price_per_day {
            active.price_per_day = ActiveValue::Set(price_per_day);
        }
        if let Some(features) = params.features {
            active.features = ActiveValue::Set(serde_json::json!(features));
        }

        let car = if active.is_changed() {
            active.update(&txn).await?
        } else {
            existing
        };

        if let Some(availability) = params.availability {
            entity::prelude::CarAvailability::delete_many()
                .filter(entity::car_availability::Column::CarId.eq(id))
                .exec(&txn)
                .await?;
            insert_windows(&txn, id, &availability).await?;
        }

        let windows = entity::prelude::CarAvailability::find()
            .filter(entity::car_availability::Column::CarId.eq(id))
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(Car::from_entity(car, windows)?))
    }

    /// Deletes a car together with its windows and bookings.
    ///
    /// # Returns
    /// - `Ok(true)` - Car deleted
    /// - `Ok(false)` - No car with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::CarAvailability::delete_many()
            .filter(entity::car_availability::Column::CarId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::CarId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Car::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_car(txn: &DatabaseTransaction, params: CreateCarParams) -> Result<Car, AppError> {
    let car = entity::car::ActiveModel {
        name: ActiveValue::Set(params.name),
        brand: ActiveValue::Set(params.brand),
        image: ActiveValue::Set(params.image),
        mileage: ActiveValue::Set(params.mileage),
        transmission: ActiveValue::Set(params.transmission.as_str().to_string()),
        seats: ActiveValue::Set(params.seats),
        luggage: ActiveValue::Set(params.luggage),
        price_per_day: ActiveValue::Set(params.price_per_day),
        features: ActiveValue::Set(serde_json::json!(params.features)),
        created_at: ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let windows = insert_windows(txn, car.id, &params.availability).await?;

    Ok(Car::from_entity(car, windows)?)
}

async fn insert_windows(
    txn: &DatabaseTransaction,
    car_id: i32,
    windows: &[DateRange],
) -> Result<Vec<entity::car_availability::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(windows.len());

    for window in windows {
        let model = entity::car_availability::ActiveModel {
            car_id: ActiveValue::Set(car_id),
            available_from: ActiveValue::Set(window.from()),
            available_to: ActiveValue::Set(window.to()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        inserted.push(model);
    }

    Ok(inserted)
}

async fn load_windows<C: ConnectionTrait>(db: &C, car_ids: Vec<i32>) -> Result<WindowsByCar, DbErr> {
    if car_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let windows = entity::prelude::CarAvailability::find()
        .filter(entity::car_availability::Column::CarId.is_in(car_ids))
        .all(db)
        .await?;

    let mut by_car: WindowsByCar = HashMap::new();
    for window in windows {
        by_car.entry(window.car_id).or_default().push(window);
    }

    Ok(by_car)
}
