//! Wizard step state machine.
//!
//! ```text
//! PersonalInfo ⇄ ActivitySelection ──────────────► Submitting ──► Completed
//!                      │      ▲                        ▲   │
//!                      ▼      │ decline         confirm│   ▼
//!                  CashConfirmation ───────────────────┘ SubmissionFailed
//!                                                        (retry / edit)
//! ```
//!
//! `reset` is an explicit action outside this graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Current step of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    ActivitySelection,
    /// Cash payers acknowledge they will pay at the counter.
    CashConfirmation,
    /// Payload handed to the submission sink, result pending.
    Submitting,
    /// Sink refused or failed; the payload is kept for a retry.
    SubmissionFailed,
    Completed,
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (PersonalInfo, ActivitySelection)
                | (ActivitySelection, PersonalInfo)
                | (ActivitySelection, CashConfirmation)
                | (ActivitySelection, Submitting)
                | (CashConfirmation, ActivitySelection)
                | (CashConfirmation, Submitting)
                | (Submitting, Completed)
                | (Submitting, SubmissionFailed)
                | (SubmissionFailed, Submitting)
                | (SubmissionFailed, ActivitySelection)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            PersonalInfo => vec![ActivitySelection],
            ActivitySelection => vec![PersonalInfo, CashConfirmation, Submitting],
            CashConfirmation => vec![ActivitySelection, Submitting],
            Submitting => vec![Completed, SubmissionFailed],
            SubmissionFailed => vec![Submitting, ActivitySelection],
            Completed => vec![],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::PersonalInfo => "personal_info",
            WizardStep::ActivitySelection => "activity_selection",
            WizardStep::CashConfirmation => "cash_confirmation",
            WizardStep::Submitting => "submitting",
            WizardStep::SubmissionFailed => "submission_failed",
            WizardStep::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
