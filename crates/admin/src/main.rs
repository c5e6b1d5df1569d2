//! Novelist Admin - composition root binary.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use novelist_admin::infrastructure::ApiAdapter;
use novelist_admin::ports::outbound::RawApiPort;
use novelist_admin::{AdminConfig, LaunchOptions};

const ADMIN_CSS: &str = include_str!("../assets/css/admin.css");

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "novelist_admin=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Novelist Admin");

    let config = AdminConfig::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Configuration loaded"
    );

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(
        ApiAdapter::new(config.api_base_url.clone(), config.request_timeout)
            .context("Failed to build HTTP client")?,
    );

    // Launch Dioxus
    let head = format!("<style>{}</style>", ADMIN_CSS);
    let window = dioxus_desktop::WindowBuilder::new().with_title("Novelist Admin");
    let cfg = dioxus_desktop::Config::new()
        .with_window(window)
        .with_custom_head(head)
        // HTML drag events drive step reordering
        .with_disable_drag_drop_handler(true);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(LaunchOptions {
            initial_rule_chain: config.initial_rule_chain,
        })
        .with_context(novelist_admin::presentation::Services::new(raw_api))
        .launch(novelist_admin::app);

    Ok(())
}
