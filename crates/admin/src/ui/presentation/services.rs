//! Service providers for the presentation layer
//!
//! Components reach application services through Dioxus context and never
//! see the HTTP adapter behind them.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::RuleChainService;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct Services {
    pub rule_chain: Arc<RuleChainService>,
}

impl Services {
    pub fn new(raw_api: Arc<dyn RawApiPort>) -> Self {
        Self {
            rule_chain: Arc::new(RuleChainService::new(raw_api)),
        }
    }
}

/// Hook to access the rule chain service from context
pub fn use_rule_chain_service() -> Arc<RuleChainService> {
    let services = use_context::<Services>();
    services.rule_chain.clone()
}
