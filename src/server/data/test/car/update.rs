use super::*;

/// Tests a partial update that leaves windows alone.
///
/// Expected: Ok(Some(Car)) with only the price changed
#[tokio::test]
async fn updates_selected_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::car::CarFactory::new(db)
        .name("Corolla")
        .window(day(2024, 6, 1), day(2024, 6, 10))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateCarParams {
                price_per_day: Some(75.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Corolla");
    assert_eq!(updated.price_per_day, 75.0);
    assert_eq!(updated.availability, vec![june(1, 10)]);

    Ok(())
}

/// Tests that a supplied window list replaces the existing windows.
///
/// Expected: Ok(Some(Car)) with only the new windows
#[tokio::test]
async fn replaces_windows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::car::CarFactory::new(db)
        .window(day(2024, 6, 1), day(2024, 6, 10))
        .window(day(2024, 6, 15), day(2024, 6, 20))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateCarParams {
                availability: Some(vec![june(11, 14)]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.availability, vec![june(11, 14)]);

    Ok(())
}

/// Tests updating a nonexistent car.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo
        .update(
            99999,
            UpdateCarParams {
                seats: Some(4),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
