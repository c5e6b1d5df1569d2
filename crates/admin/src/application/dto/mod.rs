//! Conversions between wire DTOs and domain types.

pub mod rule_chain;

pub use rule_chain::{step_list_from_wire, steps_to_wire, LoadedRuleChain, StepTemplateSummary};
