//! Registration-specific error types.
//!
//! | Error | Recoverable by the participant |
//! |-------|--------------------------------|
//! | InvalidStep | no (caller bug) |
//! | PersonalInfo | yes, fix the flagged fields |
//! | Validation | yes |
//! | EmptySelection | yes, select an activity |
//! | Pricing | yes, fix selection or payment choice |
//! | Forbidden | no |
//! | SubmissionFailed | yes, retry |
//! | Infrastructure | no |

use super::{PersonalInfoErrors, WizardStep};
use crate::domain::foundation::{
    DomainError, ErrorCode, InvalidTransition, ValidationError,
};
use crate::domain::pricing::PricingError;
use crate::ports::SubmissionError;

/// Registration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Action not available on the current step.
    InvalidStep {
        current: WizardStep,
        attempted: String,
    },

    /// One or more personal info fields failed validation.
    PersonalInfo(PersonalInfoErrors),

    /// A single value failed validation.
    Validation(ValidationError),

    /// No activity selected in this registration.
    EmptySelection,

    /// Selection or payment rules rejected the request.
    Pricing(PricingError),

    /// Staff member lacks the needed permission.
    Forbidden(String),

    /// The submission sink did not accept the payload.
    SubmissionFailed(SubmissionError),

    /// Infrastructure error.
    Infrastructure(String),
}

impl RegistrationError {
    pub fn invalid_step(current: WizardStep, attempted: impl Into<String>) -> Self {
        RegistrationError::InvalidStep {
            current,
            attempted: attempted.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        RegistrationError::Forbidden(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RegistrationError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::InvalidStep { .. } => ErrorCode::InvalidStateTransition,
            RegistrationError::PersonalInfo(_) | RegistrationError::Validation(_) => {
                ErrorCode::ValidationFailed
            }
            RegistrationError::EmptySelection => ErrorCode::EmptySelection,
            RegistrationError::Pricing(err) => err.code(),
            RegistrationError::Forbidden(_) => ErrorCode::Forbidden,
            RegistrationError::SubmissionFailed(_) => ErrorCode::SubmissionFailed,
            RegistrationError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        match self {
            RegistrationError::InvalidStep { current, attempted } => {
                format!("Cannot {} during step {}", attempted, current)
            }
            RegistrationError::PersonalInfo(errors) => errors.to_string(),
            RegistrationError::Validation(err) => err.to_string(),
            RegistrationError::EmptySelection => "Select at least one activity".to_string(),
            RegistrationError::Pricing(err) => err.to_string(),
            RegistrationError::Forbidden(msg) => format!("Permission denied: {}", msg),
            RegistrationError::SubmissionFailed(err) => err.to_string(),
            RegistrationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if the participant can fix the problem themself.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            RegistrationError::PersonalInfo(_)
                | RegistrationError::Validation(_)
                | RegistrationError::EmptySelection
                | RegistrationError::Pricing(_)
                | RegistrationError::SubmissionFailed(_)
        )
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RegistrationError {}

impl From<PricingError> for RegistrationError {
    fn from(err: PricingError) -> Self {
        RegistrationError::Pricing(err)
    }
}

impl From<PersonalInfoErrors> for RegistrationError {
    fn from(errors: PersonalInfoErrors) -> Self {
        RegistrationError::PersonalInfo(errors)
    }
}

impl From<ValidationError> for RegistrationError {
    fn from(err: ValidationError) -> Self {
        RegistrationError::Validation(err)
    }
}

impl From<SubmissionError> for RegistrationError {
    fn from(err: SubmissionError) -> Self {
        RegistrationError::SubmissionFailed(err)
    }
}

impl From<DomainError> for RegistrationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => RegistrationError::Forbidden(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                RegistrationError::Validation(ValidationError::invalid_format(field, err.message))
            }
            _ => RegistrationError::Infrastructure(err.to_string()),
        }
    }
}

impl RegistrationError {
    pub(crate) fn from_transition(current: WizardStep, err: InvalidTransition) -> Self {
        RegistrationError::InvalidStep {
            current,
            attempted: format!("move to {}", err.to),
        }
    }
}
