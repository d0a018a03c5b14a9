//! StartRegistrationHandler - Opens a new registration.
//!
//! Participants may open a self-service registration on their own. A staff
//! member driving the wizard must be allowed to register in the requested
//! mode, and counter registrations always need one.

use std::sync::Arc;

use tracing::info;

use super::RegistrationSettings;
use crate::domain::pricing::{PricingEngine, RegistrationMode};
use crate::domain::registration::{RegistrationError, RegistrationWizard};
use crate::domain::staff::PermissionSet;
use crate::ports::ActivityCatalog;

/// Command to start a new registration.
#[derive(Debug, Clone)]
pub struct StartRegistrationCommand {
    pub mode: RegistrationMode,
    /// Staff member driving the wizard, `None` for a participant on their own.
    pub staff: Option<PermissionSet>,
}

impl StartRegistrationCommand {
    /// A participant registering themselves.
    pub fn self_service() -> Self {
        Self {
            mode: RegistrationMode::SelfService,
            staff: None,
        }
    }

    pub fn by_staff(mode: RegistrationMode, staff: PermissionSet) -> Self {
        Self {
            mode,
            staff: Some(staff),
        }
    }
}

/// Handler for opening new registrations.
pub struct StartRegistrationHandler {
    catalog: Arc<dyn ActivityCatalog>,
    settings: RegistrationSettings,
}

impl StartRegistrationHandler {
    pub fn new(catalog: Arc<dyn ActivityCatalog>) -> Self {
        Self {
            catalog,
            settings: RegistrationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: RegistrationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Builds a wizard on the personal-info step for the requested mode.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the staff member may not register in this mode, or a
    ///   counter registration has no staff member
    pub fn handle(
        &self,
        cmd: StartRegistrationCommand,
    ) -> Result<RegistrationWizard, RegistrationError> {
        match (&cmd.staff, cmd.mode) {
            (Some(staff), mode) if !staff.can_register(mode) => {
                return Err(RegistrationError::forbidden(format!(
                    "{} staff cannot register in {:?} mode",
                    staff.role(),
                    mode
                )));
            }
            (None, RegistrationMode::Counter) => {
                return Err(RegistrationError::forbidden(
                    "counter registrations require a staff member",
                ));
            }
            _ => {}
        }

        let engine = PricingEngine::new(self.catalog.clone(), cmd.mode)
            .with_free_label(self.settings.free_label.clone());
        let wizard = RegistrationWizard::new(engine).with_currency(self.settings.currency.clone());

        info!(
            mode = ?cmd.mode,
            staff_role = ?cmd.staff.as_ref().map(PermissionSet::role),
            "Registration started"
        );
        Ok(wizard)
    }
}
