use super::*;

/// Tests the window-based candidate filter.
///
/// Verifies that cars without windows and cars with a window covering the range are
/// returned, while cars whose windows only partly cover it or miss it are not.
///
/// Expected: Ok(Vec<Car>) with the unrestricted and the covering car, by ID
#[tokio::test]
async fn returns_cars_whose_windows_allow_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unrestricted = factory::create_car(db).await?;
    let covering = factory::car::CarFactory::new(db)
        .window(day(2024, 6, 1), day(2024, 6, 30))
        .build()
        .await?;
    let _partial = factory::car::CarFactory::new(db)
        .window(day(2024, 6, 5), day(2024, 6, 30))
        .build()
        .await?;
    let _elsewhere = factory::car::CarFactory::new(db)
        .window(day(2024, 7, 1), day(2024, 7, 31))
        .build()
        .await?;

    let cars = CarRepository::new(db)
        .find_available(&DateRange::new(day(2024, 5, 25), day(2024, 6, 5)).unwrap())
        .await?;
    let ids: Vec<i32> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![unrestricted.id]);

    let cars = CarRepository::new(db).find_available(&june(10, 15)).await?;
    let ids: Vec<i32> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![unrestricted.id, covering.id]);
    assert_eq!(cars[1].availability, vec![june(1, 30)]);

    Ok(())
}

/// Tests a range ending exactly at a window's end is contained.
///
/// Expected: Ok(Vec<Car>) containing the car
#[tokio::test]
async fn window_bounds_are_inclusive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::CarFactory::new(db)
        .window(day(2024, 6, 1), day(2024, 6, 30))
        .build()
        .await?;

    let cars = CarRepository::new(db).find_available(&june(1, 30)).await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, car.id);

    Ok(())
}
