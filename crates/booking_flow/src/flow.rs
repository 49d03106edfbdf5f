//! BookingFlow - wires the step controller, draft store, and submission.

use std::sync::Arc;

use booking_client::{
    classify_remote_failure, BookingApi, BookingRequest, RemoteFailure, SessionGuard,
    SessionProvider,
};
use booking_core::{pricing, BookingDraft, CatalogSnapshot, Destination};
use booking_state::{
    StateMachine, StepController, SubmissionEvent, SubmissionState, WizardStep,
};
use chrono::Utc;
use log::{error, info};

use crate::error::SubmitError;
use crate::store::DraftStore;
use crate::validate::validate_draft;

/// Outcome of a submit request that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The remote accepted the booking; draft and step were reset.
    Confirmed,
    /// A submission was already in flight; nothing was done.
    AlreadyInFlight,
}

/// The whole client-side booking flow for one user session.
///
/// All mutations run on one logical thread of control; only the remote
/// call suspends. The submission machine's `Submitting` state is the
/// in-flight flag: it is entered right before the remote call and left on
/// every outcome, so a second submit while one is pending is a no-op.
pub struct BookingFlow {
    steps: StepController,
    store: DraftStore,
    catalog: CatalogSnapshot,
    machine: StateMachine,
    session: Arc<dyn SessionProvider>,
    api: Arc<dyn BookingApi>,
}

impl BookingFlow {
    pub fn new(
        catalog: CatalogSnapshot,
        session: Arc<dyn SessionProvider>,
        api: Arc<dyn BookingApi>,
    ) -> Self {
        let mut flow = Self {
            steps: StepController::new(),
            store: DraftStore::new(),
            catalog,
            machine: StateMachine::new(),
            session,
            api,
        };
        // the user may already be known at mount time
        flow.on_user_changed();
        flow
    }

    // ===== Step navigation =====

    pub fn step(&self) -> WizardStep {
        self.steps.current()
    }

    /// Whether the current step's gate passes, for enabling the "next"
    /// control.
    pub fn can_advance(&self) -> bool {
        self.steps.current().gate_satisfied(self.store.draft())
    }

    pub fn advance(&mut self) -> bool {
        self.steps.advance(self.store.draft())
    }

    pub fn retreat(&mut self) -> bool {
        self.steps.retreat()
    }

    // ===== Draft access =====

    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DraftStore {
        &mut self.store
    }

    pub fn draft(&self) -> &BookingDraft {
        self.store.draft()
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Swap in a fresh catalog snapshot when the provider finishes loading.
    pub fn set_catalog(&mut self, catalog: CatalogSnapshot) {
        self.catalog = catalog;
    }

    /// The draft's destination resolved against the current catalog.
    pub fn selected_destination(&self) -> Option<&Destination> {
        self.store
            .draft()
            .destination_id
            .as_deref()
            .and_then(|id| self.catalog.find(id))
    }

    /// Live derived total; recomputed on every call, never cached.
    pub fn total(&self) -> f64 {
        pricing::total(self.selected_destination(), self.store.draft().visitors)
    }

    // ===== Session effects =====

    /// Observer invoked whenever the session provider's user reference
    /// changes; runs the contact auto-seed.
    pub fn on_user_changed(&mut self) {
        let user = self.session.current_user();
        self.store.observe_user(user.as_ref());
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.machine.state()
    }

    // ===== Submission =====

    /// Run one submission attempt: session guard, field validation, one
    /// remote call. Success resets the draft and the step; any failure
    /// leaves them untouched so the user can retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.machine.state().is_in_flight() {
            info!("Submission already in flight; ignoring request");
            return Ok(SubmitOutcome::AlreadyInFlight);
        }
        self.machine.handle_event(SubmissionEvent::SubmitRequested);

        if let Err(err) = SessionGuard::check(self.session.as_ref()) {
            self.machine.handle_event(SubmissionEvent::SessionRejected {
                message: err.to_string(),
                revoked: err.revoked_session(),
            });
            return Err(err.into());
        }

        let today = Utc::now().date_naive();
        if let Err(err) = validate_draft(self.store.draft(), &self.catalog, today) {
            if let SubmitError::Validation { field, message } = &err {
                self.machine
                    .handle_event(SubmissionEvent::ValidationRejected {
                        field: (*field).to_string(),
                        message: (*message).to_string(),
                    });
            }
            return Err(err);
        }

        // Checks passed; the machine enters Submitting and stays there for
        // exactly the duration of the remote call.
        self.machine.handle_event(SubmissionEvent::ChecksPassed);
        let request = self.build_request();
        info!(
            "Submitting booking for destination {}",
            request.destination_id
        );

        match self.api.create_booking(request).await {
            Ok(_confirmation) => {
                self.machine.handle_event(SubmissionEvent::RemoteAccepted);
                self.store.reset();
                self.steps.reset();
                info!("Booking confirmed; draft and step reset");
                Ok(SubmitOutcome::Confirmed)
            }
            Err(err) => {
                let message = err
                    .remote_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                match classify_remote_failure(&message) {
                    RemoteFailure::AuthRejected => {
                        error!("Remote rejected session token: {message}");
                        self.session.logout();
                        self.machine
                            .handle_event(SubmissionEvent::RemoteAuthRejected {
                                message: message.clone(),
                            });
                        Err(SubmitError::RemoteAuthRejected { message })
                    }
                    RemoteFailure::Other => {
                        error!("Booking submission failed: {message}");
                        self.machine
                            .handle_event(SubmissionEvent::RemoteFailed {
                                message: message.clone(),
                            });
                        Err(SubmitError::RemoteFailed { message })
                    }
                }
            }
        }
    }

    /// Map the validated draft to the remote request shape. Only called
    /// after validation, hence the unreachable defaults.
    fn build_request(&self) -> BookingRequest {
        let draft = self.store.draft();
        BookingRequest {
            destination_id: draft.destination_id.clone().unwrap_or_default(),
            date: draft.date.map(|d| d.to_string()).unwrap_or_default(),
            visitors: draft.visitors,
            tour_type: draft.tour.clone().unwrap_or_default(),
            total_price: self.total(),
            contact_name: draft.contact.full_name.trim().to_string(),
            contact_email: draft.contact.email.trim().to_string(),
            contact_phone: draft.contact.phone.trim().to_string(),
        }
    }
}
