//! Classification of free-text failures from the booking API.
//!
//! The API reports failures as prose. Two known substrings mean it rejected
//! our credentials rather than the booking itself; those must terminate the
//! local session exactly as a pre-submission guard failure would. The
//! brittle string contract lives entirely in this module.

/// Substrings the remote uses when the token is unusable.
const MISSING_SUB_CLAIM: &str = "Missing claim: sub";
const MISSING_AUTH_HEADER: &str = "Missing Authorization Header";

/// How a remote create-booking failure should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFailure {
    /// The remote rejected the session token; the local session must go.
    AuthRejected,
    /// Any other failure; the draft is kept so the user can retry.
    Other,
}

/// Classify a free-text failure message from the create-booking call.
pub fn classify_remote_failure(message: &str) -> RemoteFailure {
    if message.contains(MISSING_SUB_CLAIM) || message.contains(MISSING_AUTH_HEADER) {
        RemoteFailure::AuthRejected
    } else {
        RemoteFailure::Other
    }
}
