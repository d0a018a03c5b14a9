//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Activity catalogs (in-memory, JSON/YAML file)
//! - `submission` - Submission sinks (in-memory, HTTP)
//! - `paid_activities` - Paid-activity readers (in-memory)

pub mod catalog;
pub mod paid_activities;
pub mod submission;

pub use catalog::{CatalogLoadError, FileActivityCatalog, InMemoryActivityCatalog};
pub use paid_activities::InMemoryPaidActivityReader;
pub use submission::{HttpSubmissionConfig, HttpSubmissionSink, InMemorySubmissionSink};
