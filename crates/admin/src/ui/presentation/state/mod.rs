//! Reactive UI state held in Dioxus context

pub mod rule_chain_state;

pub use rule_chain_state::{open_needs_confirmation, RuleChainState};
