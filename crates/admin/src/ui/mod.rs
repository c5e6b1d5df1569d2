use dioxus::prelude::*;

use novelist_domain::RuleChainId;

use crate::infrastructure::ListDragCoordinator;

pub mod presentation;

/// Startup options passed via Dioxus context from `main`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub initial_rule_chain: Option<RuleChainId>,
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(|| {
        presentation::state::RuleChainState::new(Box::new(ListDragCoordinator::new()))
    });

    rsx! {
        div {
            class: "app-shell",
            presentation::views::RuleChainView {}
        }
    }
}
