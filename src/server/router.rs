use std::{sync::Arc, time::Duration};

use axum::{extract::DefaultBodyLimit, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        booking::{self, BOOKING_TAG},
        car::{self, CAR_TAG},
        contact::{self, CONTACT_TAG},
    },
    error::{internal::InternalError, AppError},
    state::AppState,
};

/// One request is replenished every 900ms, so 1000 per 15 minutes per IP.
const API_REPLENISH_INTERVAL: Duration = Duration::from_millis(900);
const API_BURST: u32 = 1000;

/// One contact submission is replenished every 12 minutes, so 5 per hour per IP.
const CONTACT_REPLENISH_INTERVAL: Duration = Duration::from_secs(12 * 60);
const CONTACT_BURST: u32 = 5;

/// Largest request body accepted by the API.
const MAX_BODY_BYTES: usize = 10 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental API", description = "Car inventory, bookings and contact form"),
    tags(
        (name = AUTH_TAG, description = "Registration, login and session"),
        (name = CAR_TAG, description = "Car inventory and availability"),
        (name = BOOKING_TAG, description = "Car bookings"),
        (name = CONTACT_TAG, description = "Contact form")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
///
/// Every API route is rate limited per client IP and capped at [`MAX_BODY_BYTES`]; the
/// server must be started with `ConnectInfo<SocketAddr>`.
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .period(API_REPLENISH_INTERVAL)
        .burst_size(API_BURST)
        .finish()
        .ok_or(InternalError::RateLimitConfig)?;

    let (router, api) = api_router()?.split_for_parts();

    Ok(router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api)))
}

fn api_router() -> Result<OpenApiRouter<AppState>, AppError> {
    Ok(OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::claim_admin))
        .routes(routes!(car::get_cars, car::create_car))
        .routes(routes!(car::get_available_cars))
        .routes(routes!(car::create_cars_bulk))
        .routes(routes!(car::get_car_by_id, car::update_car, car::delete_car))
        .routes(routes!(booking::create_booking))
        .routes(routes!(booking::get_user_bookings))
        .routes(routes!(booking::check_availability))
        .routes(routes!(contact::get_messages))
        .routes(routes!(contact::mark_message_read))
        .merge(contact_submit_router()?))
}

/// Contact submissions get a tighter limit on top of the API-wide one.
fn contact_submit_router() -> Result<OpenApiRouter<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .period(CONTACT_REPLENISH_INTERVAL)
        .burst_size(CONTACT_BURST)
        .finish()
        .ok_or(InternalError::RateLimitConfig)?;

    Ok(OpenApiRouter::new()
        .routes(routes!(contact::submit_message))
        .layer(GovernorLayer::new(Arc::new(governor_config))))
}
