//! Application layer - Command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The domain wizard stays synchronous; handlers own every `await`.

pub mod handlers;

pub use handlers::{
    RegistrationSettings, StartModificationCommand, StartModificationHandler,
    StartRegistrationCommand, StartRegistrationHandler, SubmissionPolicy, SubmitRegistrationHandler,
    SubmitRegistrationResult,
};
