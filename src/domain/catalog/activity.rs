//! Activity and price tier value types.
//!
//! These mirror the catalog wire shape, so field names serialize in
//! camelCase (`statusColor`, `priceOptions`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, StandingId, ValidationError};

/// One priced tier ("standing") of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOption {
    pub id: StandingId,
    pub label: String,
    /// Price in minor units of `currency`. Zero means a free tier.
    pub price: u64,
    pub currency: String,
}

impl PriceOption {
    pub fn new(
        id: StandingId,
        label: impl Into<String>,
        price: u64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            price,
            currency: currency.into(),
        }
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// An event activity as published by the catalog.
///
/// # Invariants
///
/// - `price_options` is `None` (included access) or a non-empty list
/// - option ids are unique within the activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    #[serde(default)]
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_color: String,
    /// `None` when access is bundled into a separate flat event fee.
    pub price_options: Option<Vec<PriceOption>>,
}

impl Activity {
    /// Returns true when access is included in a separate fee.
    pub fn is_included_access(&self) -> bool {
        self.price_options.is_none()
    }

    /// Returns true when every catalog tier costs nothing.
    ///
    /// Included-access activities are not "all free": they have no tiers.
    pub fn is_all_free(&self) -> bool {
        match &self.price_options {
            Some(options) => !options.is_empty() && options.iter().all(PriceOption::is_free),
            None => false,
        }
    }

    /// Checks the catalog shape invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(options) = &self.price_options {
            if options.is_empty() {
                return Err(ValidationError::invalid_format(
                    "priceOptions",
                    format!(
                        "activity '{}' must list at least one tier or use null for included access",
                        self.id
                    ),
                ));
            }

            let mut seen = HashSet::new();
            for option in options {
                if !seen.insert(option.id.as_str()) {
                    return Err(ValidationError::duplicate("priceOptions", option.id.as_str()));
                }
            }
        }

        Ok(())
    }
}
