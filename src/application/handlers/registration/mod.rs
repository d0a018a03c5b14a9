//! Registration command handlers.

mod start_modification;
mod start_registration;
mod submit_registration;

pub use start_modification::{StartModificationCommand, StartModificationHandler};
pub use start_registration::{StartRegistrationCommand, StartRegistrationHandler};
pub use submit_registration::{
    SubmissionPolicy, SubmitRegistrationHandler, SubmitRegistrationResult,
};

use crate::config::PricingConfig;
use crate::domain::pricing::DEFAULT_FREE_LABEL;
use crate::domain::registration::DEFAULT_CURRENCY;

/// Values every wizard built by a handler is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSettings {
    pub currency: String,
    pub free_label: String,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            free_label: DEFAULT_FREE_LABEL.to_string(),
        }
    }
}

impl From<&PricingConfig> for RegistrationSettings {
    fn from(config: &PricingConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            free_label: config.free_label.clone(),
        }
    }
}
