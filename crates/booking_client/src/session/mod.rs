//! Session module - provider contract and pre-submission guard.

pub mod claims;
pub mod guard;
pub mod provider;

pub use claims::{decode_claims, Claims, MalformedToken};
pub use guard::{SessionGuard, SessionGuardError};
pub use provider::SessionProvider;
