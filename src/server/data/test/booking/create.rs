use super::*;

/// Tests persisting a priced booking.
///
/// Expected: Ok(Booking) with the stored period, totals and a creation time
#[tokio::test]
async fn creates_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(new_booking(car.id, user.id, june(10, 13))).await?;

    assert!(booking.id > 0);
    assert_eq!(booking.car_id, car.id);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.period, june(10, 13));
    assert_eq!(booking.total_days, 3);
    assert_eq!(booking.total_price, 120.0);
    assert_eq!(booking.pickup_time, "09:30");

    Ok(())
}
