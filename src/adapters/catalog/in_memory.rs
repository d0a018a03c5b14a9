//! In-memory activity catalog.

use std::collections::HashMap;

use super::CatalogLoadError;
use crate::domain::catalog::Activity;
use crate::domain::foundation::ActivityId;
use crate::ports::ActivityCatalog;

/// Ordered, immutable catalog held in memory.
///
/// Every activity is validated on construction and ids must be unique.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityCatalog {
    activities: Vec<Activity>,
    index: HashMap<ActivityId, usize>,
}

impl InMemoryActivityCatalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// - `InvalidActivity` if an activity fails validation
    /// - `DuplicateId` if two activities share an id
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogLoadError> {
        let mut index = HashMap::with_capacity(activities.len());
        for (position, activity) in activities.iter().enumerate() {
            activity
                .validate()
                .map_err(|source| CatalogLoadError::InvalidActivity {
                    activity_id: activity.id.clone(),
                    source,
                })?;
            if index.insert(activity.id.clone(), position).is_some() {
                return Err(CatalogLoadError::DuplicateId(activity.id.clone()));
            }
        }
        Ok(Self { activities, index })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl ActivityCatalog for InMemoryActivityCatalog {
    fn get_all(&self) -> Vec<Activity> {
        self.activities.clone()
    }

    fn find_by_id(&self, id: &ActivityId) -> Option<Activity> {
        self.index
            .get(id)
            .and_then(|&position| self.activities.get(position))
            .cloned()
    }
}
