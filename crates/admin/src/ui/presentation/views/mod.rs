//! Top-level views

pub mod rule_chain_view;

pub use rule_chain_view::RuleChainView;
