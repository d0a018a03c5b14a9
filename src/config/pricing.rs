//! Pricing configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::pricing::DEFAULT_FREE_LABEL;
use crate::domain::registration::DEFAULT_CURRENCY;

/// Pricing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// ISO 4217 code recorded on payloads
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Label of the synthetic tier shown for all-free activities
    #[serde(default = "default_free_label")]
    pub free_label: String,
}

impl PricingConfig {
    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let valid_currency =
            self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase());
        if !valid_currency {
            return Err(ValidationError::InvalidCurrency(self.currency.clone()));
        }

        if self.free_label.trim().is_empty() {
            return Err(ValidationError::EmptyFreeLabel);
        }

        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            free_label: default_free_label(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_free_label() -> String {
    DEFAULT_FREE_LABEL.to_string()
}
