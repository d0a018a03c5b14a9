//! StartModificationHandler - Reopens a participant's registration at the counter.
//!
//! Activities the participant already paid become the lock set: they stay
//! selected, cost nothing, and cannot be toggled or re-tiered.

use std::sync::Arc;

use tracing::info;

use super::RegistrationSettings;
use crate::domain::foundation::ParticipantId;
use crate::domain::pricing::{GuichetLockPolicy, PricingEngine, RegistrationMode};
use crate::domain::registration::{PersonalInfo, RegistrationError, RegistrationWizard};
use crate::domain::staff::PermissionSet;
use crate::ports::{ActivityCatalog, PaidActivityReader};

/// Command to start modifying an existing registration.
#[derive(Debug, Clone)]
pub struct StartModificationCommand {
    pub participant_id: ParticipantId,
    /// Permissions of the staff member at the counter.
    pub staff: PermissionSet,
    /// Participant record used to pre-fill the first step.
    pub personal_info: PersonalInfo,
}

/// Handler for starting counter modifications.
pub struct StartModificationHandler {
    catalog: Arc<dyn ActivityCatalog>,
    paid_activities: Arc<dyn PaidActivityReader>,
    settings: RegistrationSettings,
}

impl StartModificationHandler {
    pub fn new(
        catalog: Arc<dyn ActivityCatalog>,
        paid_activities: Arc<dyn PaidActivityReader>,
    ) -> Self {
        Self {
            catalog,
            paid_activities,
            settings: RegistrationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: RegistrationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Builds a counter-mode wizard with the participant's paid activities locked.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the staff member may not modify registrations
    /// - `Validation` if the participant is unknown
    /// - `Infrastructure` if the paid-activity lookup fails
    pub async fn handle(
        &self,
        cmd: StartModificationCommand,
    ) -> Result<RegistrationWizard, RegistrationError> {
        if !cmd.staff.can_modify_registrations() {
            return Err(RegistrationError::forbidden(format!(
                "{} staff cannot modify registrations",
                cmd.staff.role()
            )));
        }

        let paid = self
            .paid_activities
            .paid_activities(&cmd.participant_id)
            .await?;
        let locked_count = paid.len();

        let engine = PricingEngine::new(self.catalog.clone(), RegistrationMode::Counter)
            .with_free_label(self.settings.free_label.clone())
            .with_lock_policy(GuichetLockPolicy::new(paid))?;

        let wizard = RegistrationWizard::new(engine)
            .with_currency(self.settings.currency.clone())
            .with_participant(cmd.participant_id.clone())
            .with_personal_info(cmd.personal_info);

        info!(
            participant_id = %cmd.participant_id,
            staff_role = %cmd.staff.role(),
            locked = locked_count,
            "Registration modification started"
        );
        Ok(wizard)
    }
}
