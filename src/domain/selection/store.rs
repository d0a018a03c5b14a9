//! Selection store.
//!
//! Holds the participant's current choices: which activities, at which
//! standing, and how they intend to pay. Reads are public; every mutation is
//! crate-private so the pricing engine and the wizard stay the only writers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, StandingId};
use crate::domain::pricing::{MobileMoneyNetwork, PaymentMethod};

/// One chosen activity and its standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub activity_id: ActivityId,
    pub selected_standing_id: StandingId,
}

impl Selection {
    pub fn new(activity_id: ActivityId, selected_standing_id: StandingId) -> Self {
        Self {
            activity_id,
            selected_standing_id,
        }
    }
}

/// Current selection set plus payment choice.
///
/// # Invariants
///
/// - at most one selection per activity id
/// - insertion order is preserved
/// - a mobile money network is only held while the method is `MobileMoney`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selections: Vec<Selection>,
    payment_method: PaymentMethod,
    mobile_money_network: Option<MobileMoneyNetwork>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Selections in the order they were made.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn get(&self, activity_id: &ActivityId) -> Option<&Selection> {
        self.selections.iter().find(|s| &s.activity_id == activity_id)
    }

    pub fn contains(&self, activity_id: &ActivityId) -> bool {
        self.get(activity_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn mobile_money_network(&self) -> Option<&MobileMoneyNetwork> {
        self.mobile_money_network.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a selection. Returns false if the activity is already selected.
    pub(crate) fn insert(&mut self, selection: Selection) -> bool {
        if self.contains(&selection.activity_id) {
            return false;
        }
        self.selections.push(selection);
        true
    }

    pub(crate) fn remove(&mut self, activity_id: &ActivityId) -> Option<Selection> {
        let index = self
            .selections
            .iter()
            .position(|s| &s.activity_id == activity_id)?;
        Some(self.selections.remove(index))
    }

    /// Replaces the standing of an existing selection, returning the old one.
    pub(crate) fn replace_standing(
        &mut self,
        activity_id: &ActivityId,
        standing_id: StandingId,
    ) -> Option<StandingId> {
        self.selections
            .iter_mut()
            .find(|s| &s.activity_id == activity_id)
            .map(|s| std::mem::replace(&mut s.selected_standing_id, standing_id))
    }

    /// Sets the payment method; leaving mobile money drops the network.
    pub(crate) fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
        if method != PaymentMethod::MobileMoney {
            self.mobile_money_network = None;
        }
    }

    pub(crate) fn set_mobile_money_network(&mut self, network: Option<MobileMoneyNetwork>) {
        self.mobile_money_network = network;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
