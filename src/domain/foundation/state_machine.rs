//! State machine trait for step and status enums.
//!
//! Gives every lifecycle enum the same vocabulary for checking and performing
//! transitions, so callers never compare raw states by hand.

use std::fmt::Debug;
use thiserror::Error;

/// Rejected transition between two states of a [`StateMachine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: String,
    pub to: String,
}

/// Trait for enums that represent state machines.
///
/// Implementors list their legal edges; validated transitions come for free.
///
/// ```ignore
/// let next = WizardStep::PersonalInfo.transition_to(WizardStep::ActivitySelection)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + Debug {
    /// Returns true if the edge `self -> target` is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all legal targets from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, or reports both ends when it is illegal.
    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// A state with no outgoing edges is terminal.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
