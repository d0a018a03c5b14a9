//! Registration wizard.
//!
//! Orchestrates one registration: personal info, activity selection through
//! the pricing engine, the optional cash acknowledgement, and the submission
//! lifecycle. The wizard never talks to the submission sink itself; it builds
//! the payload, and the application layer reports the sink's answer back via
//! [`RegistrationWizard::record_submission_success`] or
//! [`RegistrationWizard::record_submission_failure`].

use tracing::{debug, info, warn};

use super::{PersonalInfo, RegistrationError, SubmissionPayload, WizardStep};
use crate::domain::catalog::PriceOption;
use crate::domain::foundation::{
    ActivityId, ParticipantId, RegistrationId, StandingId, StateMachine, Timestamp,
    ValidationError,
};
use crate::domain::pricing::{
    validate_payment_selection, MobileMoneyNetwork, PaymentMethod, PricingEngine, ToggleOutcome,
};
use crate::domain::selection::SelectionStore;
use crate::ports::SubmissionError;

/// Currency recorded in payloads when none is configured.
pub const DEFAULT_CURRENCY: &str = "XOF";

/// Step-gated registration state.
///
/// # Invariants
///
/// - a payload is held exactly while the step is `Submitting`,
///   `SubmissionFailed` or `Completed`
/// - payment choice can only change during `ActivitySelection`
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    engine: PricingEngine,
    step: WizardStep,
    personal_info: PersonalInfo,
    store: SelectionStore,
    participant_id: Option<ParticipantId>,
    currency: String,
    payload: Option<SubmissionPayload>,
    last_failure: Option<SubmissionError>,
}

impl RegistrationWizard {
    /// Creates a wizard on the `PersonalInfo` step.
    ///
    /// Locked activities of the engine's lock policy are pre-selected so
    /// they stay on display.
    pub fn new(engine: PricingEngine) -> Self {
        let mut store = SelectionStore::new();
        engine.seed_locked_selections(&mut store);
        Self {
            engine,
            step: WizardStep::PersonalInfo,
            personal_info: PersonalInfo::default(),
            store,
            participant_id: None,
            currency: DEFAULT_CURRENCY.to_string(),
            payload: None,
            last_failure: None,
        }
    }

    /// Ties the registration to an existing participant (modification flow).
    pub fn with_participant(mut self, participant_id: ParticipantId) -> Self {
        self.participant_id = Some(participant_id);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Pre-fills the first step, e.g. from an existing participant record.
    pub fn with_personal_info(mut self, info: PersonalInfo) -> Self {
        self.personal_info = info;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.store
    }

    pub fn participant_id(&self) -> Option<&ParticipantId> {
        self.participant_id.as_ref()
    }

    pub fn total_price(&self) -> u64 {
        self.engine.total_price(&self.store)
    }

    /// Tiers to show for an activity (none for locked ones).
    pub fn offered_options(&self, activity_id: &ActivityId) -> Result<Vec<PriceOption>, RegistrationError> {
        Ok(self.engine.offered_options(activity_id)?)
    }

    /// Payload awaiting (or having failed) delivery.
    pub fn pending_payload(&self) -> Option<&SubmissionPayload> {
        match self.step {
            WizardStep::Submitting | WizardStep::SubmissionFailed => self.payload.as_ref(),
            _ => None,
        }
    }

    /// Payload accepted by the sink.
    pub fn submitted_payload(&self) -> Option<&SubmissionPayload> {
        match self.step {
            WizardStep::Completed => self.payload.as_ref(),
            _ => None,
        }
    }

    /// Error of the most recent failed delivery.
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step 1: personal info
    // ─────────────────────────────────────────────────────────────────────────

    pub fn update_personal_info(&mut self, info: PersonalInfo) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::PersonalInfo, "edit personal info")?;
        self.personal_info = info;
        Ok(())
    }

    /// Validates personal info and moves to activity selection.
    ///
    /// # Errors
    ///
    /// - `PersonalInfo` listing every failing field
    /// - `InvalidStep` outside the `PersonalInfo` step
    pub fn submit_personal_info(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::PersonalInfo, "submit personal info")?;
        self.personal_info.validate()?;
        self.advance(WizardStep::ActivitySelection)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step 2: activity selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle(&mut self, activity_id: &ActivityId) -> Result<ToggleOutcome, RegistrationError> {
        self.ensure_step(WizardStep::ActivitySelection, "toggle an activity")?;
        Ok(self.engine.toggle(activity_id, &mut self.store)?)
    }

    pub fn set_standing(
        &mut self,
        activity_id: &ActivityId,
        standing_id: &StandingId,
    ) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::ActivitySelection, "change a standing")?;
        Ok(self.engine.set_standing(activity_id, standing_id, &mut self.store)?)
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::ActivitySelection, "choose a payment method")?;
        self.store.set_payment_method(method);
        debug!(method = %method, "Payment method selected");
        Ok(())
    }

    /// Chooses (or clears) the mobile money network.
    ///
    /// # Errors
    ///
    /// - `Validation` if the payment method is not mobile money
    pub fn select_mobile_money_network(
        &mut self,
        network: Option<MobileMoneyNetwork>,
    ) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::ActivitySelection, "choose a mobile money network")?;
        if network.is_some() && self.store.payment_method() != PaymentMethod::MobileMoney {
            return Err(ValidationError::invalid_format(
                "mobileMoneyNetwork",
                "only applies to mobile_money payments",
            )
            .into());
        }
        self.store.set_mobile_money_network(network);
        Ok(())
    }

    /// Back navigation; both steps keep their data.
    pub fn back(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::ActivitySelection, "go back")?;
        self.advance(WizardStep::PersonalInfo)
    }

    /// Checks the completion gate without moving.
    ///
    /// # Errors
    ///
    /// - `EmptySelection` when nothing new is selected
    /// - `Pricing(MissingPaymentMethod | MissingNetwork)` when payment is incomplete
    pub fn validate_selection(&self) -> Result<(), RegistrationError> {
        if self.engine.unlocked_selections(&self.store).is_empty() {
            return Err(RegistrationError::EmptySelection);
        }
        validate_payment_selection(
            self.store.payment_method(),
            self.store.mobile_money_network(),
            self.total_price(),
        )?;
        Ok(())
    }

    /// Leaves activity selection once the gate passes.
    ///
    /// Cash payers land on `CashConfirmation`; everyone else goes straight to
    /// `Submitting` with the payload built. Returns the new step.
    pub fn request_completion(&mut self) -> Result<WizardStep, RegistrationError> {
        self.ensure_step(WizardStep::ActivitySelection, "complete the registration")?;
        self.validate_selection()?;

        if self.store.payment_method().requires_cash_confirmation() {
            self.advance(WizardStep::CashConfirmation)?;
        } else {
            self.begin_submission()?;
        }
        Ok(self.step)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cash confirmation
    // ─────────────────────────────────────────────────────────────────────────

    /// The participant acknowledges paying cash; the payload is built.
    pub fn confirm_cash(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::CashConfirmation, "confirm cash payment")?;
        self.validate_selection()?;
        self.begin_submission()
    }

    pub fn decline_cash(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::CashConfirmation, "decline cash payment")?;
        self.advance(WizardStep::ActivitySelection)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    pub fn record_submission_success(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::Submitting, "record a submission result")?;
        self.advance(WizardStep::Completed)?;
        self.last_failure = None;
        if let Some(payload) = &self.payload {
            info!(
                registration_id = %payload.registration_id,
                total_price = payload.total_price,
                "Registration completed"
            );
        }
        Ok(())
    }

    pub fn record_submission_failure(&mut self, error: SubmissionError) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::Submitting, "record a submission result")?;
        warn!(error = %error, "Registration submission failed");
        self.advance(WizardStep::SubmissionFailed)?;
        self.last_failure = Some(error);
        Ok(())
    }

    /// Sends the same payload again.
    pub fn retry_submission(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::SubmissionFailed, "retry the submission")?;
        self.advance(WizardStep::Submitting)
    }

    /// Returns to activity selection after a failed submission; the payload is dropped.
    pub fn edit_after_failure(&mut self) -> Result<(), RegistrationError> {
        self.ensure_step(WizardStep::SubmissionFailed, "edit the registration")?;
        self.advance(WizardStep::ActivitySelection)?;
        self.payload = None;
        self.last_failure = None;
        Ok(())
    }

    /// Discards all local state and starts over on `PersonalInfo`.
    ///
    /// Allowed from any step. A payload already handed to the sink is not
    /// recalled. Locked activities are re-seeded since they remain paid.
    pub fn reset(&mut self) {
        debug!(from = %self.step, "Wizard reset");
        self.store.clear();
        self.engine.seed_locked_selections(&mut self.store);
        self.personal_info = PersonalInfo::default();
        self.payload = None;
        self.last_failure = None;
        self.step = WizardStep::PersonalInfo;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_step(&self, expected: WizardStep, action: &str) -> Result<(), RegistrationError> {
        if self.step != expected {
            return Err(RegistrationError::invalid_step(self.step, action));
        }
        Ok(())
    }

    fn advance(&mut self, target: WizardStep) -> Result<(), RegistrationError> {
        let next = self
            .step
            .transition_to(target)
            .map_err(|err| RegistrationError::from_transition(self.step, err))?;
        debug!(from = %self.step, to = %next, "Wizard step changed");
        self.step = next;
        Ok(())
    }

    fn begin_submission(&mut self) -> Result<(), RegistrationError> {
        let payload = self.build_payload();
        self.advance(WizardStep::Submitting)?;
        self.payload = Some(payload);
        Ok(())
    }

    fn build_payload(&self) -> SubmissionPayload {
        let (retained, selections): (Vec<_>, Vec<_>) = self
            .store
            .selections()
            .iter()
            .cloned()
            .partition(|s| self.engine.is_locked(&s.activity_id));

        SubmissionPayload {
            registration_id: RegistrationId::new(),
            mode: self.engine.mode(),
            participant_id: self.participant_id.clone(),
            personal_info: self.personal_info.clone(),
            selections,
            retained_activity_ids: retained.into_iter().map(|s| s.activity_id).collect(),
            payment_method: self.store.payment_method().as_option(),
            mobile_money_network: self.store.mobile_money_network().cloned(),
            total_price: self.total_price(),
            currency: self.currency.clone(),
            submitted_at: Timestamp::now(),
        }
    }
}
