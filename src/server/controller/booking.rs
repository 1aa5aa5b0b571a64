use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{AvailabilityDto, BookingDto, CheckAvailabilityDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::CreateBookingParams,
        service::booking::BookingService,
        state::AppState,
        util::parse::parse_date,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a car for the logged in user.
///
/// The booking is confirmed by email to the user and to the operator after it is stored.
///
/// # Returns
/// - `201 Created` - Booking stored with its computed price
/// - `400 Bad Request` - Invalid fields, dates or range
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Car does not exist
/// - `409 Conflict` - Car not available for the selected dates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car not available for selected dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateBookingParams::from_dto(payload, &user)?;

    let booking = BookingService::new(&state.db, &state.booking_locks, &state.notifier)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Get the logged in user's bookings, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/user",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "User bookings", body = Vec<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db, &state.booking_locks, &state.notifier)
        .list_for_user(user.id)
        .await?;
    let bookings: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Check whether a car is free for a range without booking it.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/check-availability",
    tag = BOOKING_TAG,
    request_body = CheckAvailabilityDto,
    responses(
        (status = 200, description = "Availability result", body = AvailabilityDto),
        (status = 400, description = "Invalid or inverted range", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Json(payload): Json<CheckAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let from = parse_date("pickupDate", &payload.pickup_date)?;
    let to = parse_date("dropoffDate", &payload.dropoff_date)?;

    let available = BookingService::new(&state.db, &state.booking_locks, &state.notifier)
        .check_availability(payload.car_id, from, to)
        .await?;

    let message = (!available).then(|| "Car not available for selected dates".to_string());

    Ok((StatusCode::OK, Json(AvailabilityDto { available, message })))
}
