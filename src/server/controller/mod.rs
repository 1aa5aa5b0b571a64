//! HTTP request handlers.
//!
//! Controllers check access through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into server params, call a service and convert the result back into a DTO.

pub mod auth;
pub mod booking;
pub mod car;
pub mod contact;
