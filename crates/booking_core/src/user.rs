//! User profile as supplied by the session provider.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile. Both fields are optional because the
/// provider may hand over a partially populated profile; the contact seed
/// falls back to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
