//! State transitions - the submission FSM transition table.

use super::events::SubmissionEvent;
use super::states::SubmissionState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: SubmissionState,
    /// The state after the transition.
    pub to: SubmissionState,
    /// The event that triggered the transition.
    pub event: SubmissionEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for the submission lifecycle.
///
/// Events not listed in the transition table leave the state unchanged; in
/// particular a `SubmitRequested` in `Submitting` stays put, which is what
/// makes re-submission while in flight a no-op.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: SubmissionState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: SubmissionState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: SubmissionState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &SubmissionState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: SubmissionEvent) -> StateTransition {
        let old_state = self.current_state.clone();
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        self.current_state = new_state.clone();

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: &SubmissionState, event: &SubmissionEvent) -> SubmissionState {
        use SubmissionEvent::*;
        use SubmissionState::*;

        match (state, event) {
            // ========== Starting an attempt ==========
            (Idle, SubmitRequested) => Validating,
            // Retrying from a terminal state starts a fresh attempt.
            (Succeeded, SubmitRequested) => Validating,
            (Failed { .. }, SubmitRequested) => Validating,

            // ========== Pre-flight checks ==========
            (Validating, ChecksPassed) => Submitting,
            (Validating, SessionRejected { message, revoked }) => Failed {
                message: message.clone(),
                failed_at: chrono::Utc::now().to_rfc3339(),
                session_revoked: *revoked,
            },
            (Validating, ValidationRejected { message, .. }) => Failed {
                message: message.clone(),
                failed_at: chrono::Utc::now().to_rfc3339(),
                session_revoked: false,
            },

            // ========== Remote outcome ==========
            (Submitting, RemoteAccepted) => Succeeded,
            (Submitting, RemoteAuthRejected { message }) => Failed {
                message: message.clone(),
                failed_at: chrono::Utc::now().to_rfc3339(),
                session_revoked: true,
            },
            (Submitting, RemoteFailed { message }) => Failed {
                message: message.clone(),
                failed_at: chrono::Utc::now().to_rfc3339(),
                session_revoked: false,
            },

            // ========== Notice dismissal ==========
            (Succeeded, NoticeDismissed) => Idle,
            (Failed { .. }, NoticeDismissed) => Idle,

            // ========== Default: No transition ==========
            _ => state.clone(),
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &SubmissionEvent) -> bool {
        let next = Self::compute_next_state(&self.current_state, event);
        next != self.current_state
    }

    /// Reset to Idle state.
    pub fn reset(&mut self) {
        self.current_state = SubmissionState::Idle;
    }
}
