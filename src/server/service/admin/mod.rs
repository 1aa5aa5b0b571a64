//! Administrative access control.
//!
//! The first administrator is bootstrapped with a one-time code printed to the server log
//! at startup.

pub mod code;
