use super::*;

/// Tests listing a car's bookings.
///
/// Verifies only bookings for the requested car are returned, ordered by pickup date.
///
/// Expected: Ok(Vec<Booking>) with two bookings in pickup order
#[tokio::test]
async fn lists_bookings_for_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car) = factory::helpers::create_booking_dependencies(db).await?;
    let other_car = factory::create_car(db).await?;

    BookingFactory::new(db, car.id, user.id)
        .dates(day(2024, 6, 20), day(2024, 6, 22))
        .build()
        .await?;
    BookingFactory::new(db, car.id, user.id)
        .dates(day(2024, 6, 5), day(2024, 6, 7))
        .build()
        .await?;
    BookingFactory::new(db, other_car.id, user.id).build().await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_car(car.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].period, june(5, 7));
    assert_eq!(bookings[1].period, june(20, 22));

    Ok(())
}

/// Tests listing bookings for a car without any.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unbooked_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.get_by_car(car.id).await?.is_empty());

    Ok(())
}
