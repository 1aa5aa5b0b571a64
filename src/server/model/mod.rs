//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types at the data layer boundary and
//! controllers convert them into DTOs. Parameter structs carry validated input from
//! controllers into services.

pub mod availability;
pub mod booking;
pub mod car;
pub mod contact;
pub mod user;
