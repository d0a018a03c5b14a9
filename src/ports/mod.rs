//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the registration domain and the surrounding application. Adapters
//! implement these ports.
//!
//! - `ActivityCatalog` - Read-only activity lookup (catalog feed in)
//! - `SubmissionSink` - Receives finished registrations (payload out)
//! - `PaidActivityReader` - Lock-set input for the counter modification flow

mod activity_catalog;
mod paid_activity_reader;
mod submission_sink;

pub use activity_catalog::ActivityCatalog;
pub use paid_activity_reader::PaidActivityReader;
pub use submission_sink::{SubmissionError, SubmissionSink};
