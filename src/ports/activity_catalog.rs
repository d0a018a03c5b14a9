//! Activity catalog port (read side).
//!
//! The pricing engine never touches fixture data directly: every lookup goes
//! through this trait, and adapters decide where the activities come from.
//!
//! # Design
//!
//! - **Read-only**: no mutation operations
//! - **Synchronous**: pricing is a pure reducer; adapters load eagerly
//! - **Ordered**: `get_all` preserves catalog order for display

use crate::domain::catalog::Activity;
use crate::domain::foundation::ActivityId;

/// Read-only lookup over the event's activities.
pub trait ActivityCatalog: Send + Sync {
    /// All activities, in catalog order.
    fn get_all(&self) -> Vec<Activity>;

    /// Look up one activity. Returns `None` when the id is unknown.
    fn find_by_id(&self, id: &ActivityId) -> Option<Activity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn ActivityCatalog) {}
    }
}
