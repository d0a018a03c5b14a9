//! Registration surface the engine is serving.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which surface a registration is being made from.
///
/// Pricing rules are identical on both; the counter surface additionally
/// supports modifying an existing registration under a lock policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationMode {
    /// Participant registers themself.
    #[default]
    SelfService,
    /// An agent registers or modifies on the participant's behalf.
    Counter,
}

impl RegistrationMode {
    pub fn allows_lock_policy(&self) -> bool {
        matches!(self, RegistrationMode::Counter)
    }
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistrationMode::SelfService => "self_service",
            RegistrationMode::Counter => "counter",
        };
        write!(f, "{}", s)
    }
}
