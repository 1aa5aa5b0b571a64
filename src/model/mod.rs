//! API data transfer objects.
//!
//! Request and response bodies exchanged with the frontend. Field names are camelCase on
//! the wire to match the fetch-based client.

pub mod api;
pub mod booking;
pub mod car;
pub mod contact;
pub mod user;
