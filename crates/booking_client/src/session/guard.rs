//! Pre-submission session guard.

use log::warn;
use thiserror::Error;

use super::claims::decode_claims;
use super::provider::SessionProvider;

/// Why the guard refused to let a submission proceed. The messages are the
/// user-facing notices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionGuardError {
    /// No authenticated user; nothing was touched.
    #[error("Please log in to make a booking")]
    Unauthenticated,

    /// The persisted token could not be decoded. The session was
    /// terminated before returning.
    #[error("Invalid session. Logging you out...")]
    CorruptSession,

    /// The token decoded but carries no subject claim, meaning it was
    /// issued before the auth schema change. The session was terminated
    /// before returning.
    #[error("Your session is outdated. Logging you out to refresh...")]
    StaleSession,
}

impl SessionGuardError {
    /// Whether the guard forced a logout as part of failing.
    pub fn revoked_session(&self) -> bool {
        matches!(self, Self::CorruptSession | Self::StaleSession)
    }
}

/// Validates that local credentials are structurally and semantically
/// usable before a submission is attempted.
///
/// A token that is well-formed but lacks a subject claim would be rejected
/// by the remote on every retry; invalidating the session here means the
/// user re-authenticates once instead of looping on submit failures.
pub struct SessionGuard;

impl SessionGuard {
    /// Run the guard against the given provider. Invoked only at
    /// submission time, never earlier.
    pub fn check(provider: &dyn SessionProvider) -> Result<(), SessionGuardError> {
        if provider.current_user().is_none() {
            return Err(SessionGuardError::Unauthenticated);
        }

        // No persisted token to sniff; the remote is the authority then.
        let Some(token) = provider.token() else {
            return Ok(());
        };

        match decode_claims(&token) {
            Err(_) => {
                warn!("Session token failed structural decode; forcing logout");
                provider.logout();
                Err(SessionGuardError::CorruptSession)
            }
            Ok(claims) if claims.sub.is_none() => {
                warn!("Session token carries no subject claim; forcing logout");
                provider.logout();
                Err(SessionGuardError::StaleSession)
            }
            Ok(_) => Ok(()),
        }
    }
}
