//! Novelist Protocol - Wire types for the rule-chain REST backend
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - raw integers in DTOs; conversions happen in the client

pub mod rule_chains;

pub use rule_chains::{
    PrivateStepPayloadData, RuleChainData, RuleChainStepData, SaveRuleChainStepsData,
    StepPayloadData, StepTemplateSummaryData, TemplateStepPayloadData,
};
