//! Event Registration - Activity selection and pricing engine
//!
//! This crate decides which event activities a participant attends, at which
//! price tier, what the registration costs, and which payment details are
//! required, for both self-service and counter registrations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
