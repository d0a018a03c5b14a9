//! Catalog domain module.
//!
//! Value types describing the activities of an event and their price tiers.
//! Lookup is provided through the `ActivityCatalog` port.

mod activity;

pub use activity::{Activity, PriceOption};

#[cfg(test)]
pub(crate) use activity::fixtures;
