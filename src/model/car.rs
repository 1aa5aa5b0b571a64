use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

impl std::str::FromStr for Transmission {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Automatic" => Ok(Self::Automatic),
            "Manual" => Ok(Self::Manual),
            other => Err(format!("unknown transmission '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindowDto {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Availability window as submitted by an administrator.
///
/// Dates are `YYYY-MM-DD` (midnight UTC) or RFC 3339 timestamps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityWindowDto {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub mileage: String,
    pub transmission: Transmission,
    pub seats: i32,
    pub luggage: i32,
    pub price_per_day: f64,
    pub features: Vec<String>,
    pub availability: Vec<AvailabilityWindowDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarDto {
    pub name: String,
    pub brand: String,
    pub image: String,
    pub mileage: String,
    pub transmission: Transmission,
    pub seats: i32,
    pub luggage: i32,
    pub price_per_day: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub availability: Vec<CreateAvailabilityWindowDto>,
}

/// Partial car update. Absent fields are left unchanged; a present `availability`
/// list replaces all existing windows.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarDto {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub mileage: Option<String>,
    pub transmission: Option<Transmission>,
    pub seats: Option<i32>,
    pub luggage: Option<i32>,
    pub price_per_day: Option<f64>,
    pub features: Option<Vec<String>>,
    pub availability: Option<Vec<CreateAvailabilityWindowDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateCarsDto {
    pub count: usize,
    pub cars: Vec<CarDto>,
}
