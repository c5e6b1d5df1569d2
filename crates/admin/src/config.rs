//! Client configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use novelist_domain::RuleChainId;

/// Client configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the rule-chain backend
    pub api_base_url: Url,
    /// Timeout applied to every backend request
    pub request_timeout: Duration,
    /// Rule chain to open on startup
    pub initial_rule_chain: Option<RuleChainId>,
}

impl AdminConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base = lookup("NOVELIST_API_BASE_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string());
        let api_base_url = Url::parse(&base)
            .with_context(|| format!("NOVELIST_API_BASE_URL is not a valid URL: {base}"))?;

        let request_timeout_secs: u64 = lookup("NOVELIST_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("NOVELIST_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        let initial_rule_chain = lookup("NOVELIST_RULE_CHAIN_ID")
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse::<i64>()
                    .map(RuleChainId::new)
                    .context("NOVELIST_RULE_CHAIN_ID must be an integer")
            })
            .transpose()?;

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            initial_rule_chain,
        })
    }
}
