//! Rendered options: the tiers actually offered for an activity.
//!
//! | catalog `priceOptions` | rendered | default standing |
//! |------------------------|----------|------------------|
//! | `null` | `[]` | `included` |
//! | all prices 0 | `[gratuit]` | `gratuit` |
//! | otherwise | unchanged | first tier |

use crate::domain::catalog::{Activity, PriceOption};
use crate::domain::foundation::StandingId;

/// Standing assigned to included-access activities.
pub const INCLUDED_STANDING: &str = "included";

/// Id of the synthetic option that replaces an all-free tier list.
pub const FREE_STANDING: &str = "gratuit";

/// Default label of the synthetic free option.
pub const DEFAULT_FREE_LABEL: &str = "Free";

/// Tiers offered for `activity`.
///
/// Several zero-priced tiers collapse to one synthetic `gratuit` option so
/// the participant sees a single free choice.
pub fn rendered_options(activity: &Activity, free_label: &str) -> Vec<PriceOption> {
    match &activity.price_options {
        None => Vec::new(),
        Some(options) if activity.is_all_free() => {
            let currency = options
                .first()
                .map(|o| o.currency.clone())
                .unwrap_or_default();
            vec![PriceOption::new(
                StandingId::from_static(FREE_STANDING),
                free_label,
                0,
                currency,
            )]
        }
        Some(options) => options.clone(),
    }
}

/// Standing assigned when `activity` is toggled on.
pub fn default_standing(activity: &Activity) -> StandingId {
    match &activity.price_options {
        None => StandingId::from_static(INCLUDED_STANDING),
        Some(_) if activity.is_all_free() => StandingId::from_static(FREE_STANDING),
        Some(options) => options
            .first()
            .map(|o| o.id.clone())
            .unwrap_or_else(|| StandingId::from_static(INCLUDED_STANDING)),
    }
}
