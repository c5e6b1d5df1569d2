//! Application services

pub mod rule_chain_service;

pub use rule_chain_service::RuleChainService;
