//! End-to-end registration scenarios.
//!
//! Drives the wizard, the pricing engine and the application handlers against
//! the in-memory adapters, the way a host application would.

use std::sync::Arc;
use std::time::Duration;

use event_registration::adapters::{
    InMemoryActivityCatalog, InMemoryPaidActivityReader, InMemorySubmissionSink,
};
use event_registration::application::{
    RegistrationSettings, StartModificationCommand, StartModificationHandler,
    StartRegistrationCommand, StartRegistrationHandler, SubmissionPolicy,
    SubmitRegistrationHandler,
};
use event_registration::domain::catalog::{Activity, PriceOption};
use event_registration::domain::foundation::{ActivityId, ParticipantId, StandingId};
use event_registration::domain::pricing::{
    MobileMoneyNetwork, PaymentMethod, PricingEngine, PricingError, RegistrationMode,
    ToggleOutcome,
};
use event_registration::domain::registration::{
    PersonalInfo, PersonalInfoField, RegistrationError, RegistrationWizard, WizardStep,
};
use event_registration::domain::selection::SelectionStore;
use event_registration::domain::staff::{PermissionSet, StaffRole};
use event_registration::ports::{ActivityCatalog, SubmissionError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn id(s: &str) -> ActivityId {
    ActivityId::new(s).unwrap()
}

fn standing(s: &str) -> StandingId {
    StandingId::new(s).unwrap()
}

fn tier(id: &str, label: &str, price: u64) -> PriceOption {
    PriceOption::new(standing(id), label, price, "XOF")
}

fn activity(id: &str, title: &str, price_options: Option<Vec<PriceOption>>) -> Activity {
    Activity {
        id: ActivityId::new(id).unwrap(),
        time: "10:00".to_string(),
        title: title.to_string(),
        description: String::new(),
        status: "open".to_string(),
        status_color: "green".to_string(),
        price_options,
    }
}

/// A = three paid tiers, D = included access, E = a single free tier.
fn catalog() -> Arc<dyn ActivityCatalog> {
    let activities = vec![
        activity(
            "A",
            "Conference",
            Some(vec![
                tier("standard", "Standard", 5_000),
                tier("vip", "VIP", 50_000),
                tier("vvip", "VVIP", 100_000),
            ]),
        ),
        activity("D", "Lunch", None),
        activity("E", "Networking", Some(vec![tier("gratuit", "Gratuit", 0)])),
    ];
    Arc::new(InMemoryActivityCatalog::new(activities).unwrap())
}

fn awa() -> PersonalInfo {
    PersonalInfo::new("Kouassi", "Awa", "awa@example.ci", "+225 07 08 09 10 11")
}

fn self_service_wizard() -> RegistrationWizard {
    let mut wizard =
        RegistrationWizard::new(PricingEngine::new(catalog(), RegistrationMode::SelfService));
    wizard.update_personal_info(awa()).unwrap();
    wizard.submit_personal_info().unwrap();
    wizard
}

// =============================================================================
// Pricing scenarios
// =============================================================================

#[test]
fn included_access_renders_no_options_and_defaults_to_included() {
    let engine = PricingEngine::new(catalog(), RegistrationMode::SelfService);
    let mut store = SelectionStore::new();

    assert!(engine.offered_options(&id("D")).unwrap().is_empty());
    assert_eq!(
        engine.toggle(&id("D"), &mut store).unwrap(),
        ToggleOutcome::Added(standing("included"))
    );
    assert_eq!(engine.total_price(&store), 0);
}

#[test]
fn all_free_activity_collapses_to_single_free_option() {
    let engine = PricingEngine::new(catalog(), RegistrationMode::SelfService);
    let options = engine.offered_options(&id("E")).unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].id, standing("gratuit"));
    assert_eq!(options[0].label, "Free");
    assert_eq!(options[0].price, 0);
}

#[test]
fn conference_lunch_and_networking_cost_5000_and_need_a_payment_method() {
    let mut wizard = self_service_wizard();
    for activity_id in ["A", "D", "E"] {
        wizard.toggle(&id(activity_id)).unwrap();
    }

    assert_eq!(wizard.total_price(), 5_000);
    assert_eq!(
        wizard.validate_selection(),
        Err(RegistrationError::Pricing(PricingError::MissingPaymentMethod))
    );
    assert_eq!(
        wizard.validate_selection().unwrap_err().message(),
        "missing payment method"
    );

    wizard.select_payment_method(PaymentMethod::Cash).unwrap();
    assert!(wizard.validate_selection().is_ok());
}

#[test]
fn deselecting_conference_drops_total_to_zero() {
    let mut wizard = self_service_wizard();
    for activity_id in ["A", "D", "E"] {
        wizard.toggle(&id(activity_id)).unwrap();
    }

    assert_eq!(wizard.toggle(&id("A")).unwrap(), ToggleOutcome::Removed);
    assert!(!wizard.selection().contains(&id("A")));
    assert_eq!(wizard.total_price(), 0);
    assert!(wizard.validate_selection().is_ok());
}

#[test]
fn upgrading_tier_changes_total_and_unknown_tier_is_rejected() {
    let mut wizard = self_service_wizard();
    wizard.toggle(&id("A")).unwrap();

    wizard.set_standing(&id("A"), &standing("vip")).unwrap();
    assert_eq!(wizard.total_price(), 50_000);

    let err = wizard.set_standing(&id("A"), &standing("platinum")).unwrap_err();
    assert_eq!(
        err,
        RegistrationError::Pricing(PricingError::UnknownStanding {
            activity_id: id("A"),
            standing_id: standing("platinum"),
        })
    );
    assert_eq!(wizard.total_price(), 50_000);
}

// =============================================================================
// Wizard scenarios
// =============================================================================

#[test]
fn empty_nom_blocks_first_step_and_flags_only_nom() {
    let mut wizard =
        RegistrationWizard::new(PricingEngine::new(catalog(), RegistrationMode::SelfService));
    wizard
        .update_personal_info(PersonalInfo {
            nom: String::new(),
            ..awa()
        })
        .unwrap();

    let err = wizard.submit_personal_info().unwrap_err();
    match err {
        RegistrationError::PersonalInfo(errors) => {
            assert_eq!(errors.fields(), vec![PersonalInfoField::Nom]);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(wizard.step(), WizardStep::PersonalInfo);
}

#[tokio::test]
async fn mobile_money_registration_is_submitted() {
    let sink = Arc::new(InMemorySubmissionSink::new());
    let handler = SubmitRegistrationHandler::new(sink.clone());
    let mut wizard = self_service_wizard();

    wizard.toggle(&id("A")).unwrap();
    wizard.set_standing(&id("A"), &standing("vvip")).unwrap();
    wizard
        .select_payment_method(PaymentMethod::MobileMoney)
        .unwrap();
    wizard
        .select_mobile_money_network(Some(MobileMoneyNetwork::new("Orange Money").unwrap()))
        .unwrap();
    assert_eq!(wizard.request_completion().unwrap(), WizardStep::Submitting);

    let result = handler.handle(&mut wizard).await.unwrap();
    assert_eq!(result.total_price, 100_000);
    assert_eq!(wizard.step(), WizardStep::Completed);

    let submitted = sink.submissions();
    assert_eq!(submitted.len(), 1);
    let json = serde_json::to_value(&submitted[0]).unwrap();
    assert_eq!(json["paymentMethod"], "mobile_money");
    assert_eq!(json["mobileMoneyNetwork"], "Orange Money");
    assert_eq!(json["selections"][0]["selectedStandingId"], "vvip");
    assert_eq!(json["currency"], "XOF");
}

#[tokio::test]
async fn cash_registration_retries_after_transient_failure() {
    let sink = Arc::new(InMemorySubmissionSink::new());
    sink.fail_next(SubmissionError::Transport("connection reset".to_string()));
    let handler = SubmitRegistrationHandler::new(sink.clone())
        .with_policy(SubmissionPolicy::with_retries(2, Duration::from_millis(1)));

    let mut wizard = self_service_wizard();
    wizard.toggle(&id("A")).unwrap();
    wizard.select_payment_method(PaymentMethod::Cash).unwrap();
    assert_eq!(
        wizard.request_completion().unwrap(),
        WizardStep::CashConfirmation
    );
    wizard.confirm_cash().unwrap();

    let result = handler.handle(&mut wizard).await.unwrap();
    assert_eq!(result.attempts, 2);
    assert_eq!(wizard.submitted_payload().unwrap().total_price, 5_000);
}

#[tokio::test]
async fn failed_submission_can_be_edited_and_resubmitted() {
    let sink = Arc::new(InMemorySubmissionSink::new());
    sink.fail_next(SubmissionError::Rejected {
        status: 422,
        message: "tier sold out".to_string(),
    });
    let handler = SubmitRegistrationHandler::new(sink.clone());

    let mut wizard = self_service_wizard();
    wizard.toggle(&id("A")).unwrap();
    wizard.set_standing(&id("A"), &standing("vip")).unwrap();
    wizard.select_payment_method(PaymentMethod::Cash).unwrap();
    wizard.request_completion().unwrap();
    wizard.confirm_cash().unwrap();

    assert!(handler.handle(&mut wizard).await.is_err());
    assert_eq!(wizard.step(), WizardStep::SubmissionFailed);

    wizard.edit_after_failure().unwrap();
    wizard.set_standing(&id("A"), &standing("standard")).unwrap();
    wizard.request_completion().unwrap();
    wizard.confirm_cash().unwrap();
    handler.handle(&mut wizard).await.unwrap();

    assert_eq!(sink.submissions().len(), 1);
    assert_eq!(sink.submissions()[0].total_price, 5_000);
}

// =============================================================================
// Counter registration
// =============================================================================

#[tokio::test]
async fn guichetier_counter_registration_uses_configured_currency() {
    let start = StartRegistrationHandler::new(catalog()).with_settings(RegistrationSettings {
        currency: "EUR".to_string(),
        free_label: "Gratuit".to_string(),
    });
    let mut wizard = start
        .handle(StartRegistrationCommand::by_staff(
            RegistrationMode::Counter,
            PermissionSet::for_role(StaffRole::Guichetier),
        ))
        .unwrap();
    wizard.update_personal_info(awa()).unwrap();
    wizard.submit_personal_info().unwrap();
    wizard.toggle(&id("A")).unwrap();
    wizard.select_payment_method(PaymentMethod::Cash).unwrap();
    assert_eq!(
        wizard.request_completion().unwrap(),
        WizardStep::CashConfirmation
    );
    wizard.confirm_cash().unwrap();

    let sink = Arc::new(InMemorySubmissionSink::new());
    SubmitRegistrationHandler::new(sink.clone())
        .handle(&mut wizard)
        .await
        .unwrap();

    let submissions = sink.submissions();
    assert_eq!(submissions[0].mode, RegistrationMode::Counter);
    assert_eq!(submissions[0].currency, "EUR");
    assert_eq!(submissions[0].total_price, 5_000);
}

#[test]
fn operator_cannot_open_a_counter_registration() {
    let err = StartRegistrationHandler::new(catalog())
        .handle(StartRegistrationCommand::by_staff(
            RegistrationMode::Counter,
            PermissionSet::for_role(StaffRole::Operator),
        ))
        .unwrap_err();
    assert!(matches!(err, RegistrationError::Forbidden(_)));
}

// =============================================================================
// Counter modification
// =============================================================================

#[tokio::test]
async fn guichet_modification_keeps_paid_activity_locked() {
    let participant = ParticipantId::new("P-042").unwrap();
    let reader = Arc::new(InMemoryPaidActivityReader::new());
    reader.insert(participant.clone(), [id("A")]).unwrap();

    let start = StartModificationHandler::new(catalog(), reader);
    let mut wizard = start
        .handle(StartModificationCommand {
            participant_id: participant.clone(),
            staff: PermissionSet::for_role(StaffRole::Guichetier),
            personal_info: awa(),
        })
        .await
        .unwrap();
    wizard.submit_personal_info().unwrap();

    // A stays displayed, cannot be toggled, and costs nothing.
    assert!(wizard.selection().contains(&id("A")));
    assert_eq!(wizard.toggle(&id("A")).unwrap(), ToggleOutcome::Locked);
    assert!(wizard.selection().contains(&id("A")));
    assert_eq!(wizard.total_price(), 0);
    assert!(matches!(
        wizard.set_standing(&id("A"), &standing("vip")),
        Err(RegistrationError::Pricing(PricingError::ActivityLocked(_)))
    ));

    wizard.toggle(&id("D")).unwrap();
    assert_eq!(wizard.request_completion().unwrap(), WizardStep::Submitting);

    let sink = Arc::new(InMemorySubmissionSink::new());
    SubmitRegistrationHandler::new(sink.clone())
        .handle(&mut wizard)
        .await
        .unwrap();

    let submissions = sink.submissions();
    let payload = &submissions[0];
    assert_eq!(payload.mode, RegistrationMode::Counter);
    assert_eq!(payload.participant_id.as_ref(), Some(&participant));
    assert_eq!(payload.retained_activity_ids, vec![id("A")]);
    assert_eq!(payload.selections.len(), 1);
    assert_eq!(payload.selections[0].activity_id, id("D"));
    assert_eq!(payload.total_price, 0);
}

#[tokio::test]
async fn intervenant_cannot_start_a_modification() {
    let participant = ParticipantId::new("P-042").unwrap();
    let reader = Arc::new(InMemoryPaidActivityReader::new());
    reader.insert(participant.clone(), [id("A")]).unwrap();

    let err = StartModificationHandler::new(catalog(), reader)
        .handle(StartModificationCommand {
            participant_id: participant,
            staff: PermissionSet::for_role(StaffRole::Intervenant),
            personal_info: awa(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Forbidden(_)));
}

#[test]
fn self_service_engine_rejects_lock_policy() {
    use event_registration::domain::pricing::GuichetLockPolicy;

    let result = PricingEngine::new(catalog(), RegistrationMode::SelfService)
        .with_lock_policy(GuichetLockPolicy::new([id("A")]));
    assert!(matches!(result, Err(PricingError::LockPolicyRequiresCounter)));
}
