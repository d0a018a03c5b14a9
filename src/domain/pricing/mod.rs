//! Pricing domain module.
//!
//! Decides which tiers are offered for each activity, keeps the selection
//! set consistent with them, totals the cost and checks that the payment
//! choice is complete.
//!
//! # Module Structure
//!
//! - `engine` - PricingEngine over an injected catalog
//! - `rendered` - Tier collapsing and default standings
//! - `payment` - PaymentMethod, MobileMoneyNetwork and payment validation
//! - `lock_policy` - Counter lock policy for already-paid activities
//! - `mode` - Registration surface
//! - `errors` - PricingError

mod engine;
mod errors;
mod lock_policy;
mod mode;
mod payment;
mod rendered;

pub use engine::{PricedLine, PricingEngine, ToggleOutcome};
pub use errors::PricingError;
pub use lock_policy::GuichetLockPolicy;
pub use mode::RegistrationMode;
pub use payment::{payment_required, validate_payment_selection, MobileMoneyNetwork, PaymentMethod};
pub use rendered::{
    default_standing, rendered_options, DEFAULT_FREE_LABEL, FREE_STANDING, INCLUDED_STANDING,
};
