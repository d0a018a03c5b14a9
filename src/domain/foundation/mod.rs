//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the state machine
//! trait that form the vocabulary of the registration domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, ParticipantId, RegistrationId, StandingId};
pub use state_machine::{InvalidTransition, StateMachine};
pub use timestamp::Timestamp;
