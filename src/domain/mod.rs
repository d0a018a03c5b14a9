//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine)
//! - `catalog` - Activities and their price options
//! - `selection` - Per-registration selection store
//! - `pricing` - Pricing engine, payment rules, lock policy
//! - `registration` - Registration wizard and submission payload
//! - `staff` - Staff permission sets

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod registration;
pub mod selection;
pub mod staff;
