//! Registration domain module.
//!
//! The multi-step registration wizard and everything it produces.
//!
//! # Module Structure
//!
//! - `wizard` - RegistrationWizard orchestrating one registration
//! - `step` - WizardStep state machine
//! - `personal_info` - First-step fields and per-field validation
//! - `payload` - Immutable submission payload
//! - `errors` - RegistrationError

mod errors;
mod payload;
mod personal_info;
mod step;
mod wizard;

pub use errors::RegistrationError;
pub use payload::SubmissionPayload;
pub use personal_info::{FieldError, PersonalInfo, PersonalInfoErrors, PersonalInfoField};
pub use step::WizardStep;
pub use wizard::{RegistrationWizard, DEFAULT_CURRENCY};
