use super::*;

/// Tests creating a car with availability windows.
///
/// Verifies the car and its windows are stored and returned with windows sorted by start.
///
/// Expected: Ok(Car) with two sorted windows
#[tokio::test]
async fn creates_car_with_windows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = car_params("Civic");
    params.availability = vec![june(20, 30), june(1, 10)];

    let repo = CarRepository::new(db);
    let car = repo.create(params).await?;

    assert!(car.id > 0);
    assert_eq!(car.name, "Civic");
    assert_eq!(car.transmission, Transmission::Manual);
    assert_eq!(car.features, vec!["Bluetooth".to_string(), "GPS".to_string()]);
    assert_eq!(car.availability, vec![june(1, 10), june(20, 30)]);

    Ok(())
}

/// Tests creating several cars at once.
///
/// Expected: Ok(Vec<Car>) with every car persisted
#[tokio::test]
async fn creates_many_cars() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let cars = repo
        .create_many(vec![car_params("Civic"), car_params("Accord")])
        .await?;

    assert_eq!(cars.len(), 2);
    for car in &cars {
        assert!(repo.get_by_id(car.id).await?.is_some());
    }

    Ok(())
}
