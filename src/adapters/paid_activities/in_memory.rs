//! In-memory paid-activity reader.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use crate::domain::foundation::{ActivityId, DomainError, ErrorCode, ParticipantId};
use crate::ports::PaidActivityReader;

/// Paid activities per participant, held in memory.
///
/// Unknown participants are reported as a validation failure on
/// `participantId`, matching what a real registry would answer.
#[derive(Debug, Default)]
pub struct InMemoryPaidActivityReader {
    paid: RwLock<HashMap<ParticipantId, BTreeSet<ActivityId>>>,
}

impl InMemoryPaidActivityReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the paid activities of a participant.
    pub fn insert(
        &self,
        participant_id: ParticipantId,
        activities: impl IntoIterator<Item = ActivityId>,
    ) -> Result<(), DomainError> {
        let mut paid = self.paid.write().map_err(|_| lock_poisoned())?;
        paid.insert(participant_id, activities.into_iter().collect());
        Ok(())
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        "paid activity registry lock poisoned",
    )
}

#[async_trait]
impl PaidActivityReader for InMemoryPaidActivityReader {
    async fn paid_activities(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<BTreeSet<ActivityId>, DomainError> {
        let paid = self.paid.read().map_err(|_| lock_poisoned())?;
        paid.get(participant_id).cloned().ok_or_else(|| {
            DomainError::validation("participantId", "unknown participant")
                .with_detail("participantId", participant_id.as_str())
        })
    }
}
