//! Submission events - what can move a submission attempt between states.

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger submission state transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionEvent {
    // ========== User Events ==========
    /// User pressed the confirm control.
    SubmitRequested,

    /// User dismissed the success or failure notice.
    NoticeDismissed,

    // ========== Pre-flight Events ==========
    /// Session guard and field validation both passed.
    ChecksPassed,

    /// The session guard rejected the attempt before any remote call.
    /// `revoked` is true when the guard forced a logout (corrupt or stale
    /// token), false when there simply was no authenticated user.
    SessionRejected { message: String, revoked: bool },

    /// A field failed validation before any remote call.
    ValidationRejected { field: String, message: String },

    // ========== Remote Events ==========
    /// The remote accepted the booking.
    RemoteAccepted,

    /// The remote rejected our credentials; the local session was
    /// terminated.
    RemoteAuthRejected { message: String },

    /// The remote call failed for any other reason.
    RemoteFailed { message: String },
}

impl SubmissionEvent {
    /// Check if this event is user-initiated.
    pub fn is_user_event(&self) -> bool {
        matches!(self, Self::SubmitRequested | Self::NoticeDismissed)
    }

    /// Check if this event ends the attempt without a successful booking.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::SessionRejected { .. }
                | Self::ValidationRejected { .. }
                | Self::RemoteAuthRejected { .. }
                | Self::RemoteFailed { .. }
        )
    }

    /// Check if this event carries a forced logout with it.
    pub fn revokes_session(&self) -> bool {
        matches!(
            self,
            Self::SessionRejected { revoked: true, .. } | Self::RemoteAuthRejected { .. }
        )
    }
}
