use super::*;

/// Tests the advisory check against windows and bookings.
///
/// Expected: free range true, booked range false, range outside window false
#[tokio::test]
async fn reports_availability() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = june_car(db).await?;
    test.seed_booking(car.id, day(2024, 6, 10), day(2024, 6, 15))
        .await
        .unwrap();
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();
    let service = BookingService::new(db, &locks, &notifier);

    assert!(
        service
            .check_availability(car.id, day(2024, 6, 15), day(2024, 6, 18))
            .await?
    );
    assert!(
        !service
            .check_availability(car.id, day(2024, 6, 12), day(2024, 6, 13))
            .await?
    );
    assert!(
        !service
            .check_availability(car.id, day(2024, 7, 1), day(2024, 7, 3))
            .await?
    );

    Ok(())
}

/// Tests the check for a reversed range and an unknown car.
///
/// Expected: Err(AvailabilityErr) and Err(NotFound)
#[tokio::test]
async fn rejects_bad_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = june_car(db).await?;
    let (notifier, _sent) = notifier();
    let locks = CarLocks::new();
    let service = BookingService::new(db, &locks, &notifier);

    let reversed = service
        .check_availability(car.id, day(2024, 6, 12), day(2024, 6, 10))
        .await;
    let unknown = service
        .check_availability(99999, day(2024, 6, 10), day(2024, 6, 12))
        .await;

    assert!(matches!(reversed, Err(AppError::AvailabilityErr(_))));
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}
