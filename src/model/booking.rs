use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking request from an authenticated user.
///
/// Dates are `YYYY-MM-DD` (midnight UTC) or RFC 3339 timestamps; `pickupTime` is `HH:MM`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub car_id: i32,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub pickup_time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub car_id: i32,
    pub total_days: i64,
    pub total_price: f64,
    pub pickup_date: DateTime<Utc>,
    pub dropoff_date: DateTime<Utc>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_time: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityDto {
    pub car_id: i32,
    pub pickup_date: String,
    pub dropoff_date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDto {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
