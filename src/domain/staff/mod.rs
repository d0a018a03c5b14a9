//! Staff domain module.
//!
//! Role-scoped permission sets for the people operating registrations.

mod permissions;

pub use permissions::{
    BasePermission, Grants, GuichetierPermission, IntervenantPermission, OperatorPermission,
    PermissionSet, RolePermission, StaffRole, SupervisorPermission,
};
