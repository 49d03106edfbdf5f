//! Booking flow error types

use booking_client::SessionGuardError;
use thiserror::Error;

/// How a submission attempt failed. Every variant is recovered locally and
/// its Display text is the user-facing notice; none are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The session guard refused the attempt. For the corrupt/stale cases
    /// the logout already happened inside the guard.
    #[error(transparent)]
    Session(#[from] SessionGuardError),

    /// A required field is missing or invalid; no remote call was made and
    /// the draft is untouched.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// The remote rejected our credentials; the local session was
    /// terminated and the user must re-authenticate before retrying.
    #[error("Your session is invalid. Logging you out automatically...")]
    RemoteAuthRejected { message: String },

    /// The remote call failed for any other reason; draft and step are
    /// preserved so the user can retry without re-entering data.
    #[error("Failed to submit booking. Please try again.")]
    RemoteFailed { message: String },
}

impl SubmitError {
    /// Whether this failure carried a forced logout with it.
    pub fn revoked_session(&self) -> bool {
        match self {
            SubmitError::Session(inner) => inner.revoked_session(),
            SubmitError::RemoteAuthRejected { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
