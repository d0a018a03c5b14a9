//! Counter ("guichet") lock policy for modifying an existing registration.
//!
//! Activities paid in an earlier session are locked: they stay visible in the
//! participant's list, cannot be toggled or re-tiered, and are not charged
//! again. The policy only answers membership questions; the pricing engine
//! applies it.

use std::collections::BTreeSet;

use crate::domain::foundation::ActivityId;

/// Set of activities that are already paid and therefore immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuichetLockPolicy {
    locked: BTreeSet<ActivityId>,
}

impl GuichetLockPolicy {
    pub fn new(locked: impl IntoIterator<Item = ActivityId>) -> Self {
        Self {
            locked: locked.into_iter().collect(),
        }
    }

    pub fn is_locked(&self, activity_id: &ActivityId) -> bool {
        self.locked.contains(activity_id)
    }

    pub fn locked_ids(&self) -> impl Iterator<Item = &ActivityId> {
        self.locked.iter()
    }

    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }
}
