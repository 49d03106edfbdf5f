//! Submission states - lifecycle of one booking submission attempt.

use serde::{Deserialize, Serialize};

/// Defines the possible states of a submission attempt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// No submission in progress; the confirm control is live.
    Idle,

    /// Running the session guard and field validation. No remote call has
    /// been made yet.
    Validating,

    /// The create-booking request is in flight. A second submit request in
    /// this state is a no-op.
    Submitting,

    /// The remote accepted the booking; draft and step have been reset.
    Succeeded,

    /// The attempt failed. Unless the session was revoked, draft and step
    /// are preserved so the user can retry without re-entering data.
    Failed {
        /// User-facing failure message.
        message: String,
        /// ISO timestamp of the failure.
        failed_at: String,
        /// Whether the failure invalidated the local session (a logout was
        /// forced; re-authentication is required before retrying).
        session_revoked: bool,
    },
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

impl SubmissionState {
    /// Terminal for the attempt: a new submit request starts a fresh one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }

    /// The remote call is in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the confirm control should currently accept a submit.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, Self::Validating | Self::Submitting)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready to confirm",
            Self::Validating => "Checking your booking",
            Self::Submitting => "Processing...",
            Self::Succeeded => "Booking confirmed",
            Self::Failed { message, .. } => message,
        }
    }
}
