use super::*;
use crate::server::{
    data::{booking::BookingRepository, car::CarRepository},
    model::{availability::DateRange, car::UpdateCarParams},
};

/// Tests booking a free range inside the car's window.
///
/// Verifies the booking is stored with computed days and price and that the renter
/// confirmation and operator summary are both sent.
///
/// Expected: Ok(Booking) with 3 days at 45.0/day and two emails
#[tokio::test]
async fn creates_booking_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, mut sent) = notifier();
    let locks = CarLocks::new();

    let service = BookingService::new(db, &locks, &notifier);
    let booking = service
        .create(booking_params(car.id, &user, day(2024, 6, 10), day(2024, 6, 13)))
        .await?;

    assert_eq!(booking.car_id, car.id);
    assert_eq!(booking.total_days, 3);
    assert_eq!(booking.total_price, 135.0);
    assert_eq!(booking.email, user.email);

    let customer = sent.recv().await.unwrap();
    let operator = sent.recv().await.unwrap();
    assert_eq!(customer.to, user.email);
    assert_eq!(operator.to, "ops@example.com");

    Ok(())
}

/// Tests that a partial day is billed as a full day.
///
/// Expected: Ok(Booking) with 2 billable days
#[tokio::test]
async fn rounds_partial_days_up() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let dropoff = day(2024, 6, 11) + chrono::Duration::hours(3);
    let booking = BookingService::new(db, &locks, &notifier)
        .create(booking_params(car.id, &user, day(2024, 6, 10), dropoff))
        .await?;

    assert_eq!(booking.total_days, 2);
    assert_eq!(booking.total_price, 90.0);

    Ok(())
}

/// Tests booking a range overlapping an existing booking.
///
/// Expected: Err(AppError::Conflict) and no email sent
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = june_car(db).await?;
    let existing = test
        .seed_booking(car.id, day(2024, 6, 10), day(2024, 6, 15))
        .await
        .unwrap();
    let (notifier, mut sent) = notifier();
    let locks = CarLocks::new();

    let result = BookingService::new(db, &locks, &notifier)
        .create(booking_params(
            car.id,
            &existing.renter,
            day(2024, 6, 14),
            day(2024, 6, 16),
        ))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(sent.try_recv().is_err());

    Ok(())
}

/// Tests booking a range starting exactly when another ends.
///
/// Expected: Ok(Booking)
#[tokio::test]
async fn allows_back_to_back_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    test.seed_booking(car.id, day(2024, 6, 10), day(2024, 6, 15))
        .await
        .unwrap();
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let result = BookingService::new(db, &locks, &notifier)
        .create(booking_params(car.id, &user, day(2024, 6, 15), day(2024, 6, 17)))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests booking outside the car's availability window.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_range_outside_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let result = BookingService::new(db, &locks, &notifier)
        .create(booking_params(car.id, &user, day(2024, 6, 28), day(2024, 7, 2)))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a dropoff on the same instant as pickup.
///
/// Expected: Err(AppError::AvailabilityErr)
#[tokio::test]
async fn rejects_empty_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let result = BookingService::new(db, &locks, &notifier)
        .create(booking_params(car.id, &user, day(2024, 6, 10), day(2024, 6, 10)))
        .await;

    assert!(matches!(result, Err(AppError::AvailabilityErr(_))));
    assert!(BookingRepository::new(db).get_by_car(car.id).await?.is_empty());

    Ok(())
}

/// Tests a request that starts before the car's window and ends inside it.
///
/// Expected: Err(AppError::Conflict) and nothing stored
#[tokio::test]
async fn rejects_range_starting_before_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let result = BookingService::new(db, &locks, &notifier)
        .create(booking_params(car.id, &user, day(2024, 5, 25), day(2024, 6, 5)))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(BookingRepository::new(db).get_by_car(car.id).await?.is_empty());

    Ok(())
}

/// Tests field validation of the request.
///
/// Expected: Err(AppError::ValidationErr) for a blank location and a bad pickup time
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let mut params = booking_params(car.id, &user, day(2024, 6, 10), day(2024, 6, 12));
    params.pickup_location = String::new();
    params.pickup_time = "25:00".to_string();

    let result = BookingService::new(db, &locks, &notifier).create(params).await;

    match result {
        Err(AppError::ValidationErr(errors)) => {
            let fields = errors.field_errors();
            assert!(fields.contains_key("pickup_location"));
            assert!(fields.contains_key("pickup_time"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests booking a car that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let result = BookingService::new(db, &locks, &notifier)
        .create(booking_params(99999, &user, day(2024, 6, 10), day(2024, 6, 12)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two concurrent requests for overlapping ranges on the same car.
///
/// Verifies the per-car lock lets exactly one through; the other sees the first
/// booking and is rejected.
///
/// Expected: one Ok(Booking), one Err(AppError::Conflict), one stored booking
#[tokio::test]
async fn concurrent_overlapping_requests_book_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_user = factory::create_user(db).await?;
    let second_user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let service = BookingService::new(db, &locks, &notifier);
    let (first, second) = tokio::join!(
        service.create(booking_params(car.id, &first_user, day(2024, 6, 10), day(2024, 6, 14))),
        service.create(booking_params(car.id, &second_user, day(2024, 6, 12), day(2024, 6, 16))),
    );

    let outcomes = [first, second];
    let created = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 1);

    let stored = BookingRepository::new(db)
        .get_by_car(car.id)
        .await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests that a failing mail transport does not fail the booking.
///
/// Expected: Ok(Booking) and the booking is stored
#[tokio::test]
async fn mail_failure_does_not_fail_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (mailer, mut sent) = RecordingMailer::failing();
    let notifier = BookingNotifier::new(Arc::new(mailer), "ops@example.com".to_string());
    let locks = CarLocks::new();

    let booking = BookingService::new(db, &locks, &notifier)
        .create(booking_params(car.id, &user, day(2024, 6, 10), day(2024, 6, 12)))
        .await?;

    assert!(sent.recv().await.is_some());
    assert!(sent.recv().await.is_some());

    let bookings = BookingService::new(db, &locks, &notifier)
        .list_for_user(user.id)
        .await?;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);

    Ok(())
}

/// Tests the car is read only after its lock is taken.
///
/// The windows are narrowed while the lock is held elsewhere; the waiting booking must
/// be decided against the narrowed windows.
///
/// Expected: Err(AppError::Conflict) and nothing stored
#[tokio::test]
async fn booking_sees_windows_changed_while_waiting_for_lock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();

    let guard = locks.acquire(car.id).await;

    let booking = tokio::spawn({
        let db = db.clone();
        let locks = locks.clone();
        let notifier = notifier.clone();
        let params = booking_params(car.id, &user, day(2024, 6, 20), day(2024, 6, 25));
        async move {
            BookingService::new(&db, &locks, &notifier)
                .create(params)
                .await
        }
    });

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(!booking.is_finished());

    CarRepository::new(db)
        .update(
            car.id,
            UpdateCarParams {
                availability: Some(vec![
                    DateRange::new(day(2024, 6, 1), day(2024, 6, 10)).unwrap(),
                ]),
                ..Default::default()
            },
        )
        .await?;
    drop(guard);

    let result = booking.await.unwrap();

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(BookingRepository::new(db).get_by_car(car.id).await?.is_empty());

    Ok(())
}
