//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns mutation outcomes instead of `()`

pub mod step_list;

pub use step_list::StepList;
