use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a car with bookings and windows.
///
/// Expected: Ok(true), then the car, its windows and bookings are gone
#[tokio::test]
async fn deletes_car_and_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::car::CarFactory::new(db)
        .window(day(2024, 6, 1), day(2024, 6, 30))
        .build()
        .await?;
    factory::create_booking(db, car.id, user.id).await?;

    let repo = CarRepository::new(db);
    let deleted = repo.delete(car.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(car.id).await?.is_none());

    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CarAvailability::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a nonexistent car.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(!repo.delete(99999).await?);

    Ok(())
}
