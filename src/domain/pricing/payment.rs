//! Payment method selection and its validation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PricingError;
use crate::domain::foundation::ValidationError;

/// How the participant intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Nothing chosen yet.
    #[default]
    None,
    MobileMoney,
    Cash,
}

impl PaymentMethod {
    pub fn is_set(&self) -> bool {
        !matches!(self, PaymentMethod::None)
    }

    /// Cash payments need an explicit acknowledgement before submission.
    pub fn requires_cash_confirmation(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }

    /// Returns the method, or `None` when unset. Used for optional payload fields.
    pub fn as_option(self) -> Option<Self> {
        self.is_set().then_some(self)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::None => "none",
            PaymentMethod::MobileMoney => "mobile_money",
            PaymentMethod::Cash => "cash",
        };
        write!(f, "{}", s)
    }
}

/// Mobile money operator chosen for a `MobileMoney` payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MobileMoneyNetwork(String);

impl MobileMoneyNetwork {
    /// Creates a network name; surrounding whitespace is dropped.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("mobileMoneyNetwork"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileMoneyNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MobileMoneyNetwork {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MobileMoneyNetwork> for String {
    fn from(network: MobileMoneyNetwork) -> Self {
        network.0
    }
}

/// A payment is required whenever something costs money.
pub fn payment_required(total: u64) -> bool {
    total > 0
}

/// Checks that the payment choice is complete for the given total.
///
/// | total | method | network | result |
/// |-------|--------|---------|--------|
/// | 0 | any | any | Ok |
/// | > 0 | none | - | missing payment method |
/// | > 0 | mobile_money | none | missing network |
/// | > 0 | mobile_money | set | Ok |
/// | > 0 | cash | - | Ok |
pub fn validate_payment_selection(
    method: PaymentMethod,
    network: Option<&MobileMoneyNetwork>,
    total: u64,
) -> Result<(), PricingError> {
    if !payment_required(total) {
        return Ok(());
    }
    match method {
        PaymentMethod::None => Err(PricingError::MissingPaymentMethod),
        PaymentMethod::MobileMoney if network.is_none() => Err(PricingError::MissingNetwork),
        PaymentMethod::MobileMoney | PaymentMethod::Cash => Ok(()),
    }
}
