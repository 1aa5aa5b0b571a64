use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    error::AppError,
    model::booking::CreateBookingParams,
    service::{
        booking::BookingService,
        lock::CarLocks,
        notification::{
            test_support::{RecordingMailer, SentMail},
            BookingNotifier,
        },
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, car::CarFactory, helpers::day},
};

mod check_availability;
mod create;

fn notifier() -> (BookingNotifier, UnboundedReceiver<SentMail>) {
    let (mailer, sent) = RecordingMailer::new();
    (
        BookingNotifier::new(Arc::new(mailer), "ops@example.com".to_string()),
        sent,
    )
}

fn booking_params(
    car_id: i32,
    user: &entity::user::Model,
    pickup_date: DateTime<Utc>,
    dropoff_date: DateTime<Utc>,
) -> CreateBookingParams {
    CreateBookingParams {
        car_id,
        user_id: user.id,
        email: user.email.clone(),
        pickup_location: "Airport".to_string(),
        dropoff_location: "Downtown".to_string(),
        pickup_date,
        dropoff_date,
        pickup_time: "10:00".to_string(),
    }
}

async fn june_car(db: &DatabaseConnection) -> Result<entity::car::Model, sea_orm::DbErr> {
    CarFactory::new(db)
        .price_per_day(45.0)
        .window(day(2024, 6, 1), day(2024, 6, 30))
        .build()
        .await
}
