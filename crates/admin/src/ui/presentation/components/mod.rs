//! UI components

pub mod rule_chain;
