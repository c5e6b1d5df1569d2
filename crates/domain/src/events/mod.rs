//! Aggregate mutation outcomes
//!
//! Mutations on aggregates return a value describing what happened instead
//! of `()`, so callers can log or react without diffing state.

pub mod step_list_events;

pub use step_list_events::*;
