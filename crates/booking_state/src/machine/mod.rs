//! Booking state machines.

pub mod events;
pub mod states;
pub mod step;
pub mod transitions;

pub use events::SubmissionEvent;
pub use states::SubmissionState;
pub use step::{StepController, WizardStep};
pub use transitions::{StateMachine, StateTransition};
