//! Booking API module.

pub mod client;
pub mod models;
