//! Paid activity reader port.
//!
//! Supplies, for a participant whose registration is being modified at the
//! counter, the activities already paid in an earlier session. Those become
//! the lock set of the `GuichetLockPolicy`.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::foundation::{ActivityId, DomainError, ParticipantId};

/// Read port for previously paid activities.
#[async_trait]
pub trait PaidActivityReader: Send + Sync {
    /// Activities already paid by the participant.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` (with a `participantId` detail) if the participant is unknown
    /// - `InternalError` on backend failure
    async fn paid_activities(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<BTreeSet<ActivityId>, DomainError>;
}
