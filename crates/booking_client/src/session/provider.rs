//! The consumed surface of the authentication/session provider.

use booking_core::UserProfile;

/// Contract the surrounding app's session provider must satisfy.
///
/// The flow never creates sessions; it only reads the current user, reads
/// the persisted token, and asks for termination when the token turns out
/// to be unusable.
pub trait SessionProvider: Send + Sync {
    /// The authenticated user, if any.
    fn current_user(&self) -> Option<UserProfile>;

    /// The persisted opaque session token, if any.
    fn token(&self) -> Option<String>;

    /// Terminate the session. Side effect only.
    fn logout(&self);
}
