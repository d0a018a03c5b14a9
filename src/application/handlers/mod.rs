//! Application handlers.
//!
//! Command handlers that drive the registration wizard against the ports.

pub mod registration;

pub use registration::{
    RegistrationSettings, StartModificationCommand, StartModificationHandler,
    StartRegistrationCommand, StartRegistrationHandler, SubmissionPolicy, SubmitRegistrationHandler,
    SubmitRegistrationResult,
};
