//! Selection domain module.
//!
//! The live set of activities a participant has chosen, keyed by activity.

mod store;

pub use store::{Selection, SelectionStore};
