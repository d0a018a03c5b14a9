//! Immutable payload handed to the submission sink.

use serde::{Deserialize, Serialize};

use super::PersonalInfo;
use crate::domain::foundation::{ActivityId, ParticipantId, RegistrationId, Timestamp};
use crate::domain::pricing::{MobileMoneyNetwork, PaymentMethod, RegistrationMode};
use crate::domain::selection::Selection;

/// Snapshot of a registration at the moment local validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub registration_id: RegistrationId,
    pub mode: RegistrationMode,
    /// Set when an existing participant's registration is being modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<ParticipantId>,
    pub personal_info: PersonalInfo,
    /// Selections made in this registration.
    pub selections: Vec<Selection>,
    /// Previously paid activities kept unchanged by a modification.
    #[serde(default)]
    pub retained_activity_ids: Vec<ActivityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_money_network: Option<MobileMoneyNetwork>,
    pub total_price: u64,
    pub currency: String,
    pub submitted_at: Timestamp,
}
