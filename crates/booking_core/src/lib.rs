//! booking_core - Core domain types for the booking flow
//!
//! This crate provides the foundational types used across the booking crates:
//! - `catalog` - destinations as supplied by the catalog provider
//! - `draft` - the in-progress booking record and its contact details
//! - `pricing` - derived total calculation
//! - `user` - the user profile as supplied by the session provider

pub mod catalog;
pub mod draft;
pub mod pricing;
pub mod user;

// Re-export commonly used types
pub use catalog::{CatalogSnapshot, Destination};
pub use draft::{BookingDraft, ContactInfo};
pub use user::UserProfile;
