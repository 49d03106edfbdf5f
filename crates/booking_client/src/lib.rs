//! booking_client - Remote boundary for the booking flow
//!
//! This crate owns everything that talks to, or reasons about, the outside
//! world:
//! - `api` - HTTP client for the booking persistence API
//! - `session` - session provider contract and the pre-submission guard
//! - `classify` - classification of free-text remote failure messages
//! - `assistant` - thin relay to the text-generation service

pub mod api;
pub mod assistant;
pub mod classify;
pub mod client_trait;
pub mod error;
mod http;
pub mod session;

// Re-export commonly used types
pub use api::client::BookingApiClient;
pub use api::models::{BookingConfirmation, BookingRequest};
pub use assistant::AssistantClient;
pub use classify::{classify_remote_failure, RemoteFailure};
pub use client_trait::BookingApi;
pub use error::ApiError;
pub use session::{SessionGuard, SessionGuardError, SessionProvider};
