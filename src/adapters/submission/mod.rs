//! Submission sink adapters.

mod http;
mod in_memory;

pub use http::{HttpSubmissionConfig, HttpSubmissionSink};
pub use in_memory::InMemorySubmissionSink;
