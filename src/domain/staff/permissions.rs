//! Staff permission sets.
//!
//! Every staff role carries its own closed permission enum, so granting a
//! counter permission to a supervisor does not type-check.
//!
//! | Role | Defaults |
//! |------|----------|
//! | Base | view activities |
//! | Supervisor | view dashboards, modify registrations |
//! | Operator | register participants, view registrations |
//! | Intervenant | view schedule |
//! | Guichetier | register at counter, modify registrations, collect cash |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::pricing::RegistrationMode;

/// A permission belonging to exactly one staff role.
pub trait RolePermission: Copy + Ord + fmt::Debug + 'static {
    /// Permissions a freshly assigned member of the role holds.
    fn defaults() -> &'static [Self];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePermission {
    ViewActivities,
    ViewMessages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorPermission {
    ViewDashboards,
    ManageStaff,
    ModifyRegistrations,
    ExportRegistrations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorPermission {
    RegisterParticipants,
    ViewRegistrations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervenantPermission {
    ViewSchedule,
    PostMessages,
    UploadPhotos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuichetierPermission {
    RegisterAtCounter,
    ModifyRegistrations,
    CollectCash,
}

impl RolePermission for BasePermission {
    fn defaults() -> &'static [Self] {
        &[BasePermission::ViewActivities]
    }
}

impl RolePermission for SupervisorPermission {
    fn defaults() -> &'static [Self] {
        &[
            SupervisorPermission::ViewDashboards,
            SupervisorPermission::ModifyRegistrations,
        ]
    }
}

impl RolePermission for OperatorPermission {
    fn defaults() -> &'static [Self] {
        &[
            OperatorPermission::RegisterParticipants,
            OperatorPermission::ViewRegistrations,
        ]
    }
}

impl RolePermission for IntervenantPermission {
    fn defaults() -> &'static [Self] {
        &[IntervenantPermission::ViewSchedule]
    }
}

impl RolePermission for GuichetierPermission {
    fn defaults() -> &'static [Self] {
        &[
            GuichetierPermission::RegisterAtCounter,
            GuichetierPermission::ModifyRegistrations,
            GuichetierPermission::CollectCash,
        ]
    }
}

/// Granted permissions of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grants<P: RolePermission> {
    granted: BTreeSet<P>,
}

impl<P: RolePermission> Grants<P> {
    /// No permissions at all.
    pub fn empty() -> Self {
        Self {
            granted: BTreeSet::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            granted: P::defaults().iter().copied().collect(),
        }
    }

    /// Returns true if the permission was not held before.
    pub fn grant(&mut self, permission: P) -> bool {
        self.granted.insert(permission)
    }

    /// Returns true if the permission was held.
    pub fn revoke(&mut self, permission: P) -> bool {
        self.granted.remove(&permission)
    }

    pub fn has(&self, permission: P) -> bool {
        self.granted.contains(&permission)
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.granted.iter()
    }
}

impl<P: RolePermission> Default for Grants<P> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Staff role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Base,
    Supervisor,
    Operator,
    Intervenant,
    Guichetier,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaffRole::Base => "base",
            StaffRole::Supervisor => "supervisor",
            StaffRole::Operator => "operator",
            StaffRole::Intervenant => "intervenant",
            StaffRole::Guichetier => "guichetier",
        };
        write!(f, "{}", s)
    }
}

/// Permissions of a staff member, tagged by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "permissions", rename_all = "snake_case")]
pub enum PermissionSet {
    Base(Grants<BasePermission>),
    Supervisor(Grants<SupervisorPermission>),
    Operator(Grants<OperatorPermission>),
    Intervenant(Grants<IntervenantPermission>),
    Guichetier(Grants<GuichetierPermission>),
}

impl PermissionSet {
    /// Default permission set for a role.
    pub fn for_role(role: StaffRole) -> Self {
        match role {
            StaffRole::Base => PermissionSet::Base(Grants::with_defaults()),
            StaffRole::Supervisor => PermissionSet::Supervisor(Grants::with_defaults()),
            StaffRole::Operator => PermissionSet::Operator(Grants::with_defaults()),
            StaffRole::Intervenant => PermissionSet::Intervenant(Grants::with_defaults()),
            StaffRole::Guichetier => PermissionSet::Guichetier(Grants::with_defaults()),
        }
    }

    pub fn role(&self) -> StaffRole {
        match self {
            PermissionSet::Base(_) => StaffRole::Base,
            PermissionSet::Supervisor(_) => StaffRole::Supervisor,
            PermissionSet::Operator(_) => StaffRole::Operator,
            PermissionSet::Intervenant(_) => StaffRole::Intervenant,
            PermissionSet::Guichetier(_) => StaffRole::Guichetier,
        }
    }

    /// Whether this member may drive a registration in the given mode.
    ///
    /// Counter registrations are reserved to guichetiers; operators may
    /// assist self-service registrations.
    pub fn can_register(&self, mode: RegistrationMode) -> bool {
        match (self, mode) {
            (PermissionSet::Guichetier(g), _) => g.has(GuichetierPermission::RegisterAtCounter),
            (PermissionSet::Operator(g), RegistrationMode::SelfService) => {
                g.has(OperatorPermission::RegisterParticipants)
            }
            _ => false,
        }
    }

    /// Whether this member may reopen an existing participant's registration.
    pub fn can_modify_registrations(&self) -> bool {
        match self {
            PermissionSet::Supervisor(g) => g.has(SupervisorPermission::ModifyRegistrations),
            PermissionSet::Guichetier(g) => g.has(GuichetierPermission::ModifyRegistrations),
            _ => false,
        }
    }
}
