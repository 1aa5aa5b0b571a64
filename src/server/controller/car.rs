use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        car::{BulkCreateCarsDto, CarDto, CreateCarDto, PaginatedCarsDto, Transmission, UpdateCarDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            availability::DateRange,
            car::{CarFilter, CreateCarParams, UpdateCarParams},
        },
        service::car::CarService,
        state::AppState,
        util::parse::parse_date,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct CarListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub brand: Option<String>,
    pub transmission: Option<Transmission>,
    pub min_seats: Option<i32>,
    pub max_price: Option<f64>,
}

fn default_entries() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct AvailableCarsParams {
    pub from: String,
    pub to: String,
}

/// Get a filtered, paginated list of cars.
///
/// `entries` is clamped to 1..=100.
#[utoipa::path(
    get,
    path = "/api/v1/cars",
    tag = CAR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("brand" = Option<String>, Query, description = "Brand substring"),
        ("transmission" = Option<Transmission>, Query, description = "Automatic or Manual"),
        ("min_seats" = Option<i32>, Query, description = "Minimum number of seats"),
        ("max_price" = Option<f64>, Query, description = "Maximum price per day")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars(
    State(state): State<AppState>,
    Query(params): Query<CarListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CarFilter {
        brand: params
            .brand
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty()),
        transmission: params.transmission,
        min_seats: params.min_seats,
        max_price: params.max_price,
    };
    let entries = params.entries.clamp(1, MAX_ENTRIES);

    let cars = CarService::new(&state.db, &state.booking_locks)
        .get_paginated(filter, params.page, entries)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Get the cars that can be booked for the whole range.
///
/// Dates accept `YYYY-MM-DD` or RFC 3339.
#[utoipa::path(
    get,
    path = "/api/v1/cars/available",
    tag = CAR_TAG,
    params(
        ("from" = String, Query, description = "Start of the range"),
        ("to" = String, Query, description = "End of the range (exclusive)")
    ),
    responses(
        (status = 200, description = "Cars available for the range", body = Vec<CarDto>),
        (status = 400, description = "Invalid or inverted range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_cars(
    State(state): State<AppState>,
    Query(params): Query<AvailableCarsParams>,
) -> Result<impl IntoResponse, AppError> {
    let range = DateRange::new(
        parse_date("from", &params.from)?,
        parse_date("to", &params.to)?,
    )?;

    let cars = CarService::new(&state.db, &state.booking_locks).get_available(range).await?;
    let cars: Vec<CarDto> = cars.into_iter().map(|car| car.into_dto()).collect();

    Ok((StatusCode::OK, Json(cars)))
}

#[utoipa::path(
    get,
    path = "/api/v1/cars/{car_id}",
    tag = CAR_TAG,
    params(
        ("car_id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car details", body = CarDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(car_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db, &state.booking_locks).get_by_id(car_id).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Create a car with its availability windows.
///
/// # Access Control
/// - `Admin` - Only admins can add cars
///
/// # Returns
/// - `201 Created` - Successfully created car
/// - `400 Bad Request` - Invalid car data or availability window
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Successfully created car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateCarParams::from_dto(payload)?;
    let car = CarService::new(&state.db, &state.booking_locks).create(params).await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Create several cars at once.
///
/// Either every car is stored or none is.
///
/// # Access Control
/// - `Admin` - Only admins can add cars
#[utoipa::path(
    post,
    path = "/api/v1/cars/bulk",
    tag = CAR_TAG,
    request_body = Vec<CreateCarDto>,
    responses(
        (status = 201, description = "Successfully created cars", body = BulkCreateCarsDto),
        (status = 400, description = "Empty list or invalid car data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cars_bulk(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<CreateCarDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = payload
        .into_iter()
        .map(CreateCarParams::from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let cars = CarService::new(&state.db, &state.booking_locks).create_many(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkCreateCarsDto {
            count: cars.len(),
            cars: cars.into_iter().map(|car| car.into_dto()).collect(),
        }),
    ))
}

/// Update a car.
///
/// Omitted fields are left unchanged. When `availability` is present it replaces every
/// existing window.
///
/// # Access Control
/// - `Admin` - Only admins can edit cars
#[utoipa::path(
    put,
    path = "/api/v1/cars/{car_id}",
    tag = CAR_TAG,
    params(
        ("car_id" = i32, Path, description = "Car ID")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Successfully updated car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    session: Session,
    Path(car_id): Path<i32>,
    Json(payload): Json<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateCarParams::from_dto(payload)?;
    let car = CarService::new(&state.db, &state.booking_locks).update(car_id, params).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Delete a car together with its windows and bookings.
///
/// # Access Control
/// - `Admin` - Only admins can delete cars
#[utoipa::path(
    delete,
    path = "/api/v1/cars/{car_id}",
    tag = CAR_TAG,
    params(
        ("car_id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted car"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    session: Session,
    Path(car_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CarService::new(&state.db, &state.booking_locks).delete(car_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
