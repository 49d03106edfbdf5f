//! booking_state - State machines for the booking flow
//!
//! This crate provides the wizard step controller (four ordered, gated
//! steps) and the submission lifecycle FSM driven by explicit events.

pub mod machine;

// Re-export commonly used types
pub use machine::{
    StateMachine, StateTransition, StepController, SubmissionEvent, SubmissionState, WizardStep,
};
