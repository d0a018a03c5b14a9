//! Pricing and selection errors.

use thiserror::Error;

use crate::domain::foundation::{ActivityId, ErrorCode, StandingId};

/// Errors raised by pricing engine operations and payment validation.
///
/// All variants are user-recoverable: correcting the selection or the
/// payment choice clears them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("unknown activity '{0}'")]
    UnknownActivity(ActivityId),

    #[error("activity '{0}' is not selected")]
    NotSelected(ActivityId),

    #[error("unknown standing '{standing_id}' for activity '{activity_id}'")]
    UnknownStanding {
        activity_id: ActivityId,
        standing_id: StandingId,
    },

    #[error("activity '{0}' is locked")]
    ActivityLocked(ActivityId),

    #[error("missing payment method")]
    MissingPaymentMethod,

    #[error("missing network")]
    MissingNetwork,

    #[error("a lock policy can only be applied in counter mode")]
    LockPolicyRequiresCounter,
}

impl PricingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::UnknownActivity(_) => ErrorCode::ActivityNotFound,
            PricingError::NotSelected(_) => ErrorCode::ActivityNotSelected,
            PricingError::UnknownStanding { .. } => ErrorCode::UnknownStanding,
            PricingError::ActivityLocked(_) => ErrorCode::ActivityLocked,
            PricingError::MissingPaymentMethod => ErrorCode::MissingPaymentMethod,
            PricingError::MissingNetwork => ErrorCode::MissingNetwork,
            PricingError::LockPolicyRequiresCounter => ErrorCode::InvalidStateTransition,
        }
    }

    /// True for the two errors produced by payment validation.
    pub fn is_payment_error(&self) -> bool {
        matches!(
            self,
            PricingError::MissingPaymentMethod | PricingError::MissingNetwork
        )
    }
}
