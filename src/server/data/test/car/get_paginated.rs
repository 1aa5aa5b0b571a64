use super::*;

/// Tests pagination over all cars.
///
/// Expected: Ok with the requested page and the overall total
#[tokio::test]
async fn paginates_cars() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_car(db).await?;
    }

    let repo = CarRepository::new(db);
    let (first_page, total) = repo.get_paginated(&CarFilter::default(), 0, 2).await?;
    let (last_page, _) = repo.get_paginated(&CarFilter::default(), 2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(last_page.len(), 1);
    assert!(first_page[0].id < first_page[1].id);

    Ok(())
}

/// Tests combining brand, transmission, seat and price filters.
///
/// Expected: Ok with only the car matching every filter
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::car::CarFactory::new(db)
        .brand("Toyota")
        .transmission("Manual")
        .seats(7)
        .price_per_day(60.0)
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .brand("Toyota")
        .transmission("Automatic")
        .seats(7)
        .price_per_day(60.0)
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .brand("Toyota")
        .transmission("Manual")
        .seats(4)
        .price_per_day(60.0)
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .brand("Honda")
        .transmission("Manual")
        .seats(7)
        .price_per_day(60.0)
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .brand("Toyota")
        .transmission("Manual")
        .seats(7)
        .price_per_day(90.0)
        .build()
        .await?;

    let filter = CarFilter {
        brand: Some("toy".to_string()),
        transmission: Some(Transmission::Manual),
        min_seats: Some(5),
        max_price: Some(75.0),
    };

    let repo = CarRepository::new(db);
    let (cars, total) = repo.get_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, matching.id);

    Ok(())
}
