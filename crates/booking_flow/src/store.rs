//! Draft store - single writer over the in-progress booking.

use booking_core::{BookingDraft, UserProfile};
use chrono::NaiveDate;
use log::debug;

/// Owns the mutable draft. Every setter swaps in a fresh value produced by
/// the draft's copy constructors, so a reader holding a clone never sees a
/// half-applied update.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: BookingDraft,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// An owned copy for confirmation display or payload building.
    pub fn snapshot(&self) -> BookingDraft {
        self.draft.clone()
    }

    // ===== Step 1 =====

    pub fn set_destination(&mut self, id: impl Into<String>) {
        self.draft = self.draft.with_destination(id);
    }

    // ===== Step 2 =====

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft = self.draft.with_date(date);
    }

    pub fn set_tour(&mut self, tour: impl Into<String>) {
        self.draft = self.draft.with_tour(tour);
    }

    pub fn increment_visitors(&mut self) {
        self.draft = self.draft.with_more_visitors();
    }

    /// Floored at one visitor.
    pub fn decrement_visitors(&mut self) {
        self.draft = self.draft.with_fewer_visitors();
    }

    // ===== Step 3 =====

    pub fn set_contact_name(&mut self, full_name: impl Into<String>) {
        self.draft = self.draft.with_contact_name(full_name);
    }

    pub fn set_contact_email(&mut self, email: impl Into<String>) {
        self.draft = self.draft.with_contact_email(email);
    }

    pub fn set_contact_phone(&mut self, phone: impl Into<String>) {
        self.draft = self.draft.with_contact_phone(phone);
    }

    // ===== Effects =====

    /// Observer for "the session provider's user changed".
    ///
    /// Seeds the contact from the profile only while both name and email
    /// are still empty, so it is idempotent and commutes with a profile
    /// arriving after the user started typing.
    pub fn observe_user(&mut self, user: Option<&UserProfile>) {
        let Some(user) = user else {
            return;
        };
        if !self.draft.contact.is_unseeded() {
            return;
        }
        debug!("Seeding contact details from user profile");
        self.draft = self.draft.with_seeded_contact(
            user.name.as_deref().unwrap_or_default(),
            user.email.as_deref().unwrap_or_default(),
        );
    }

    /// Back to the empty draft, after a confirmed submission.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_target_single_fields() {
        let mut store = DraftStore::new();
        store.set_destination("giza");
        store.set_tour("Guided Tour");
        store.set_contact_phone("123");

        let draft = store.draft();
        assert_eq!(draft.destination_id.as_deref(), Some("giza"));
        assert_eq!(draft.tour.as_deref(), Some("Guided Tour"));
        assert_eq!(draft.contact.phone, "123");
        assert_eq!(draft.visitors, 1);
    }

    #[test]
    fn visitor_mutations_floor_at_one() {
        let mut store = DraftStore::new();
        store.decrement_visitors();
        store.decrement_visitors();
        assert_eq!(store.draft().visitors, 1);

        store.increment_visitors();
        store.increment_visitors();
        store.decrement_visitors();
        assert_eq!(store.draft().visitors, 2);
    }

    #[test]
    fn user_seed_fires_once_and_never_again() {
        let mut store = DraftStore::new();
        store.observe_user(Some(&UserProfile::new("Ana", "a@x.com")));
        assert_eq!(store.draft().contact.full_name, "Ana");
        assert_eq!(store.draft().contact.email, "a@x.com");
        assert_eq!(store.draft().contact.phone, "");

        // user reference changes later; nothing is overwritten
        store.observe_user(Some(&UserProfile::new("Bob", "b@x.com")));
        assert_eq!(store.draft().contact.full_name, "Ana");
    }

    #[test]
    fn user_seed_respects_manual_edits() {
        let mut store = DraftStore::new();
        store.set_contact_name("Typed Name");
        store.observe_user(Some(&UserProfile::new("Ana", "a@x.com")));
        assert_eq!(store.draft().contact.full_name, "Typed Name");
        assert_eq!(store.draft().contact.email, "");
    }

    #[test]
    fn user_seed_tolerates_partial_profiles() {
        let mut store = DraftStore::new();
        store.observe_user(Some(&UserProfile {
            name: Some("Ana".to_string()),
            email: None,
        }));
        assert_eq!(store.draft().contact.full_name, "Ana");
        assert_eq!(store.draft().contact.email, "");
    }

    #[test]
    fn no_user_means_no_seed() {
        let mut store = DraftStore::new();
        store.observe_user(None);
        assert!(store.draft().contact.is_unseeded());
    }

    #[test]
    fn reset_returns_to_empty_draft() {
        let mut store = DraftStore::new();
        store.set_destination("giza");
        store.increment_visitors();
        store.reset();
        assert_eq!(store.draft(), &BookingDraft::new());
    }
}
