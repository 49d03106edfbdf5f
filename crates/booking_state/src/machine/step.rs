//! Wizard steps - the four ordered stages of the booking form.

use booking_core::BookingDraft;
use serde::{Deserialize, Serialize};

/// The ordered stages of the booking wizard.
///
/// Transitions move one step at a time and clamp at both ends; there is no
/// skipping. The last step is terminal: submission is offered there instead
/// of forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: pick a destination from the catalog.
    ChooseDestination,
    /// Step 2: pick a date, a tour variant, and the visitor count.
    ScheduleTour,
    /// Step 3: contact details.
    ContactDetails,
    /// Step 4: review and confirm.
    Confirm,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::ChooseDestination
    }
}

impl WizardStep {
    /// 1-based position, for progress display.
    pub fn number(self) -> u8 {
        match self {
            Self::ChooseDestination => 1,
            Self::ScheduleTour => 2,
            Self::ContactDetails => 3,
            Self::Confirm => 4,
        }
    }

    /// Terminal step where the confirm control replaces "next".
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirm)
    }

    /// The following step, clamped at `Confirm`.
    pub fn next(self) -> Self {
        match self {
            Self::ChooseDestination => Self::ScheduleTour,
            Self::ScheduleTour => Self::ContactDetails,
            Self::ContactDetails => Self::Confirm,
            Self::Confirm => Self::Confirm,
        }
    }

    /// The preceding step, clamped at `ChooseDestination`.
    pub fn previous(self) -> Self {
        match self {
            Self::ChooseDestination => Self::ChooseDestination,
            Self::ScheduleTour => Self::ChooseDestination,
            Self::ContactDetails => Self::ScheduleTour,
            Self::Confirm => Self::ContactDetails,
        }
    }

    /// Forward gate for this step: the precondition the draft must satisfy
    /// before the controller permits `advance`.
    pub fn gate_satisfied(self, draft: &BookingDraft) -> bool {
        match self {
            Self::ChooseDestination => draft.destination_id.is_some(),
            Self::ScheduleTour => draft.date.is_some() && draft.tour.is_some(),
            Self::ContactDetails => {
                !draft.contact.full_name.is_empty() && !draft.contact.email.is_empty()
            }
            // Terminal; advance is a no-op regardless of the draft.
            Self::Confirm => false,
        }
    }

    /// Human-readable stage title for progress display.
    pub fn title(self) -> &'static str {
        match self {
            Self::ChooseDestination => "Choose Destination",
            Self::ScheduleTour => "Select Date & Tour",
            Self::ContactDetails => "Contact Details",
            Self::Confirm => "Confirm Booking",
        }
    }
}

/// Tracks the current wizard step and enforces gated one-step transitions.
///
/// Holds nothing but the step value; the gates read the draft passed in by
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepController {
    current: WizardStep,
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Move forward one step if the current step's gate passes.
    /// Returns whether the step changed.
    pub fn advance(&mut self, draft: &BookingDraft) -> bool {
        if !self.current.gate_satisfied(draft) {
            return false;
        }
        let next = self.current.next();
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Move back one step; a no-op at the first step.
    /// Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        let previous = self.current.previous();
        let changed = previous != self.current;
        self.current = previous;
        changed
    }

    /// Back to step 1, after a confirmed submission.
    pub fn reset(&mut self) {
        self.current = WizardStep::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn complete_draft() -> BookingDraft {
        BookingDraft::new()
            .with_destination("giza")
            .with_date(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap())
            .with_tour("Guided Tour")
            .with_contact_name("Ana")
            .with_contact_email("a@x.com")
    }

    #[test]
    fn steps_are_ordered_one_through_four() {
        assert_eq!(WizardStep::ChooseDestination.number(), 1);
        assert_eq!(WizardStep::Confirm.number(), 4);
        assert!(WizardStep::Confirm.is_terminal());
    }

    #[test]
    fn advance_is_rejected_without_destination() {
        let mut controller = StepController::new();
        let empty = BookingDraft::new();

        assert!(!controller.advance(&empty));
        assert_eq!(controller.current(), WizardStep::ChooseDestination);
    }

    #[test]
    fn advance_walks_all_gates_with_complete_draft() {
        let mut controller = StepController::new();
        let draft = complete_draft();

        assert!(controller.advance(&draft));
        assert_eq!(controller.current(), WizardStep::ScheduleTour);
        assert!(controller.advance(&draft));
        assert!(controller.advance(&draft));
        assert_eq!(controller.current(), WizardStep::Confirm);

        // terminal: advancing further is a no-op
        assert!(!controller.advance(&draft));
        assert_eq!(controller.current(), WizardStep::Confirm);
    }

    #[test]
    fn schedule_gate_needs_both_date_and_tour() {
        let dated_only = BookingDraft::new()
            .with_destination("giza")
            .with_date(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert!(!WizardStep::ScheduleTour.gate_satisfied(&dated_only));

        let toured = dated_only.with_tour("Guided Tour");
        assert!(WizardStep::ScheduleTour.gate_satisfied(&toured));
    }

    #[test]
    fn retreat_clamps_at_first_step() {
        let mut controller = StepController::new();
        assert!(!controller.retreat());
        assert_eq!(controller.current(), WizardStep::ChooseDestination);

        let draft = complete_draft();
        controller.advance(&draft);
        assert!(controller.retreat());
        assert_eq!(controller.current(), WizardStep::ChooseDestination);
    }

    #[test]
    fn reset_returns_to_first_step() {
        let mut controller = StepController::new();
        let draft = complete_draft();
        controller.advance(&draft);
        controller.advance(&draft);

        controller.reset();
        assert_eq!(controller.current(), WizardStep::ChooseDestination);
    }
}
