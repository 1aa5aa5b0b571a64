//! Car factory for creating test car entities and their availability windows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// Availability windows added with `window()` are inserted after the car row.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db)
///     .brand("Toyota")
///     .window(day(2024, 6, 1), day(2024, 6, 30))
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    brand: String,
    transmission: String,
    seats: i32,
    luggage: i32,
    price_per_day: f64,
    features: Vec<String>,
    windows: Vec<(DateTime<Utc>, DateTime<Utc>)>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"`
    /// - brand: `"Toyota"`
    /// - transmission: `"Automatic"`
    /// - seats: `5`, luggage: `2`
    /// - price_per_day: `50.0`
    /// - no features, no availability windows
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Car {}", id),
            brand: "Toyota".to_string(),
            transmission: "Automatic".to_string(),
            seats: 5,
            luggage: 2,
            price_per_day: 50.0,
            features: Vec::new(),
            windows: Vec::new(),
        }
    }

    /// Sets the car name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the transmission label (`"Automatic"` or `"Manual"`).
    pub fn transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    /// Sets the number of seats.
    pub fn seats(mut self, seats: i32) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the daily price.
    pub fn price_per_day(mut self, price_per_day: f64) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    /// Sets the feature list.
    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Adds an availability window.
    pub fn window(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.windows.push((from, to));
        self
    }

    /// Builds and inserts the car and its availability windows.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let car = entity::car::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            brand: ActiveValue::Set(self.brand),
            image: ActiveValue::Set("uploads/test-car.jpg".to_string()),
            mileage: ActiveValue::Set("15 km/l".to_string()),
            transmission: ActiveValue::Set(self.transmission),
            seats: ActiveValue::Set(self.seats),
            luggage: ActiveValue::Set(self.luggage),
            price_per_day: ActiveValue::Set(self.price_per_day),
            features: ActiveValue::Set(serde_json::json!(self.features)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for (from, to) in self.windows {
            entity::car_availability::ActiveModel {
                id: ActiveValue::NotSet,
                car_id: ActiveValue::Set(car.id),
                available_from: ActiveValue::Set(from),
                available_to: ActiveValue::Set(to),
            }
            .insert(self.db)
            .await?;
        }

        Ok(car)
    }
}

/// Creates an unrestricted car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
