//! The in-progress, not-yet-submitted booking record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-text contact details, auto-seeded once from the user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    /// Both seedable fields are still empty. The auto-seed effect only
    /// fires while this holds, which makes it idempotent.
    pub fn is_unseeded(&self) -> bool {
        self.full_name.is_empty() && self.email.is_empty()
    }
}

/// The draft built up across the wizard steps.
///
/// Every setter returns a fresh value instead of mutating in place, so a
/// reader holding the previous draft never observes a half-applied update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDraft {
    /// Selected destination, referencing the catalog. Set in step 1.
    pub destination_id: Option<String>,
    /// Visit date. Set in step 2; must not lie before the current date at
    /// submission time.
    pub date: Option<NaiveDate>,
    /// Visitor count, never below 1.
    pub visitors: u32,
    /// Selected tour variant. Set in step 2.
    pub tour: Option<String>,
    /// Contact details. Edited in step 3.
    pub contact: ContactInfo,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            destination_id: None,
            date: None,
            visitors: 1,
            tour: None,
            contact: ContactInfo::default(),
        }
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destination(&self, id: impl Into<String>) -> Self {
        Self {
            destination_id: Some(id.into()),
            ..self.clone()
        }
    }

    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..self.clone()
        }
    }

    pub fn with_tour(&self, tour: impl Into<String>) -> Self {
        Self {
            tour: Some(tour.into()),
            ..self.clone()
        }
    }

    /// One more visitor.
    pub fn with_more_visitors(&self) -> Self {
        Self {
            visitors: self.visitors + 1,
            ..self.clone()
        }
    }

    /// One fewer visitor, floored at 1.
    pub fn with_fewer_visitors(&self) -> Self {
        Self {
            visitors: self.visitors.saturating_sub(1).max(1),
            ..self.clone()
        }
    }

    pub fn with_contact_name(&self, full_name: impl Into<String>) -> Self {
        Self {
            contact: ContactInfo {
                full_name: full_name.into(),
                ..self.contact.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_contact_email(&self, email: impl Into<String>) -> Self {
        Self {
            contact: ContactInfo {
                email: email.into(),
                ..self.contact.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_contact_phone(&self, phone: impl Into<String>) -> Self {
        Self {
            contact: ContactInfo {
                phone: phone.into(),
                ..self.contact.clone()
            },
            ..self.clone()
        }
    }

    /// Seed name and email in one step, leaving the phone untouched.
    ///
    /// No-op unless the contact is still unseeded; entered data is never
    /// overwritten.
    pub fn with_seeded_contact(&self, full_name: &str, email: &str) -> Self {
        if !self.contact.is_unseeded() {
            return self.clone();
        }
        Self {
            contact: ContactInfo {
                full_name: full_name.to_string(),
                email: email.to_string(),
                phone: self.contact.phone.clone(),
            },
            ..self.clone()
        }
    }
}
