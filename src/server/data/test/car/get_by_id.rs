use super::*;

/// Tests getting a car created by the factory.
///
/// Expected: Ok(Some(Car)) including its window
#[tokio::test]
async fn gets_car_with_windows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::car::CarFactory::new(db)
        .window(day(2024, 6, 1), day(2024, 6, 10))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let car = repo.get_by_id(created.id).await?;

    assert!(car.is_some());
    let car = car.unwrap();
    assert_eq!(car.id, created.id);
    assert_eq!(car.availability, vec![june(1, 10)]);

    Ok(())
}

/// Tests getting a nonexistent car.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.get_by_id(99999).await?.is_none());

    Ok(())
}

/// Tests that a stored transmission outside the known set is reported as corrupt.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn reports_corrupt_transmission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::car::CarFactory::new(db)
        .transmission("CVT")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let result = repo.get_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
