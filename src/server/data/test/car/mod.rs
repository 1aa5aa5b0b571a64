use crate::{
    model::car::Transmission,
    server::{
        data::car::CarRepository,
        error::AppError,
        model::{
            availability::DateRange,
            car::{CarFilter, CreateCarParams, UpdateCarParams},
        },
    },
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::day};

mod create;
mod delete;
mod find_available;
mod get_by_id;
mod get_paginated;
mod update;

fn car_params(name: &str) -> CreateCarParams {
    CreateCarParams {
        name: name.to_string(),
        brand: "Honda".to_string(),
        image: "uploads/civic.jpg".to_string(),
        mileage: "14 km/l".to_string(),
        transmission: Transmission::Manual,
        seats: 5,
        luggage: 3,
        price_per_day: 42.5,
        features: vec!["Bluetooth".to_string(), "GPS".to_string()],
        availability: Vec::new(),
    }
}

fn june(from: u32, to: u32) -> DateRange {
    DateRange::new(day(2024, 6, from), day(2024, 6, to)).unwrap()
}
