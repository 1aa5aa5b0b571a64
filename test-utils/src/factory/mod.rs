//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let car = factory::car::CarFactory::new(&db)
//!     .price_per_day(45.0)
//!     .window(from, to)
//!     .build()
//!     .await?;
//! let booking = factory::booking::BookingFactory::new(&db, car.id, user.id)
//!     .dates(pickup, dropoff)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `car` - Create car entities with availability windows
//! - `booking` - Create booking entities
//! - `helpers` - ID generation and dependency helpers

pub mod booking;
pub mod car;
pub mod helpers;
pub mod user;

pub use booking::create_booking;
pub use car::create_car;
pub use user::create_user;
