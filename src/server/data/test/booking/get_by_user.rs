use super::*;
use chrono::Duration;

/// Tests listing a user's bookings.
///
/// Verifies bookings are ordered by creation time, most recent first, and that other
/// users' bookings are excluded.
///
/// Expected: Ok(Vec<Booking>) newest first
#[tokio::test]
async fn lists_user_bookings_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car) = factory::helpers::create_booking_dependencies(db).await?;
    let other_user = factory::create_user(db).await?;
    let now = chrono::Utc::now();

    let older = BookingFactory::new(db, car.id, user.id)
        .dates(day(2024, 7, 1), day(2024, 7, 3))
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = BookingFactory::new(db, car.id, user.id)
        .dates(day(2024, 6, 1), day(2024, 6, 3))
        .created_at(now)
        .build()
        .await?;
    BookingFactory::new(db, car.id, other_user.id)
        .dates(day(2024, 8, 1), day(2024, 8, 3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, newer.id);
    assert_eq!(bookings[1].id, older.id);

    Ok(())
}
