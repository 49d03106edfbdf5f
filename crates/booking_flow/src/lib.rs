//! booking_flow - Orchestration of the booking wizard
//!
//! Owns the mutable draft, the step controller, and the submission
//! sequence: session guard, ordered field validation, one remote call,
//! then reset on success. Failures preserve the user's entered data.

pub mod error;
pub mod flow;
pub mod store;
mod validate;

// Re-exports
pub use error::{Result, SubmitError};
pub use flow::{BookingFlow, SubmitOutcome};
pub use store::DraftStore;
