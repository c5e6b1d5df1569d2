//! Rule Chain View - Open, edit and save one rule chain

use dioxus::prelude::*;

use novelist_domain::RuleChainId;

use crate::ui::presentation::components::rule_chain::StepListEditor;
use crate::ui::presentation::services::use_rule_chain_service;
use crate::ui::presentation::state::{open_needs_confirmation, RuleChainState};
use crate::ui::LaunchOptions;

#[component]
pub fn RuleChainView() -> Element {
    let service = use_rule_chain_service();
    let launch = use_context::<LaunchOptions>();
    let mut state = use_context::<RuleChainState>();

    let mut chain_input = use_signal(|| {
        launch
            .initial_rule_chain
            .map(|id| id.to_string())
            .unwrap_or_default()
    });

    let load_chain = {
        let service = service.clone();
        use_callback(move |id: RuleChainId| {
            let service = service.clone();
            state.begin_load(id);
            spawn(async move {
                match service.load_chain(id).await {
                    Ok(chain) => state.finish_load(chain),
                    Err(e) => {
                        tracing::warn!(chain_id = %id, error = %e, "Loading rule chain failed");
                        state.fail_load(id, format!("Failed to load rule chain {}: {}", id, e));
                    }
                }
            });
        })
    };

    // Templates and the configured chain are fetched once on mount
    {
        let service = service.clone();
        use_hook(move || {
            spawn(async move {
                match service.list_templates().await {
                    Ok(templates) => state.templates.set(templates),
                    Err(e) => tracing::warn!(error = %e, "Loading step templates failed"),
                }
            });
            if let Some(id) = launch.initial_rule_chain {
                load_chain.call(id);
            }
        });
    }

    let save = {
        let service = service.clone();
        move |_| {
            let Some(id) = *state.chain_id.read() else {
                return;
            };
            let sent = state.steps.read().clone();
            let service = service.clone();
            state.saving.set(true);
            state.clear_error();
            spawn(async move {
                match service.save_steps(id, &sent).await {
                    Ok(saved) => state.finish_save(&sent, saved),
                    Err(e) => {
                        tracing::warn!(chain_id = %id, error = %e, "Saving steps failed");
                        state.fail_save(format!("Failed to save steps: {}", e));
                    }
                }
            });
        }
    };

    // Chain waiting for the user to confirm discarding unsaved steps
    let mut pending_open: Signal<Option<RuleChainId>> = use_signal(|| None);

    let open_from_input = move |_| {
        let parsed = chain_input.read().trim().parse::<i64>();
        let Ok(id) = parsed.map(RuleChainId::new) else {
            state.set_error("Rule chain id must be a number");
            return;
        };
        let needs_confirmation =
            open_needs_confirmation(*state.dirty.read(), state.chain_id.read().is_some());
        if needs_confirmation {
            pending_open.set(Some(id));
        } else {
            load_chain.call(id);
        }
    };

    let is_loading = *state.loading.read();
    let is_saving = *state.saving.read();
    let is_dirty = *state.dirty.read();
    let has_chain = state.chain_id.read().is_some();
    let name = state.chain_name.read().clone();
    let description = state.chain_description.read().clone();
    let updated_at = (*state.updated_at.read())
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    rsx! {
        div {
            class: "rule-chain-view",

            header {
                class: "rule-chain-view__header",
                div {
                    class: "rule-chain-view__title",
                    if has_chain {
                        h1 { "{name}" }
                        if let Some(description) = description {
                            p { class: "muted", "{description}" }
                        }
                        if let Some(updated_at) = updated_at {
                            p { class: "muted", "Last saved {updated_at}" }
                        }
                    } else {
                        h1 { "Rule Chain Editor" }
                    }
                }

                div {
                    class: "rule-chain-view__actions",
                    input {
                        r#type: "text",
                        placeholder: "Chain id",
                        value: "{chain_input.read()}",
                        oninput: move |e| chain_input.set(e.value()),
                    }
                    button {
                        class: "button",
                        disabled: is_loading,
                        onclick: open_from_input,
                        if is_loading { "Loading..." } else { "Open" }
                    }
                    if is_dirty {
                        span { class: "badge badge--dirty", "Unsaved changes" }
                    }
                    button {
                        class: "button button--primary",
                        disabled: !has_chain || is_saving || !is_dirty,
                        onclick: save,
                        if is_saving { "Saving..." } else { "Save" }
                    }
                }
            }

            if let Some(target) = pending_open() {
                div {
                    class: "confirm-banner",
                    span { "Discard unsaved changes and open rule chain {target}?" }
                    button {
                        class: "button",
                        onclick: move |_| pending_open.set(None),
                        "Keep editing"
                    }
                    button {
                        class: "button button--danger",
                        onclick: move |_| {
                            pending_open.set(None);
                            load_chain.call(target);
                        },
                        "Discard and open"
                    }
                }
            }

            if let Some(err) = state.error.read().clone() {
                div {
                    class: "error-banner",
                    span { "{err}" }
                    button {
                        class: "error-banner__dismiss",
                        onclick: move |_| state.clear_error(),
                        "×"
                    }
                }
            }

            if has_chain {
                StepListEditor {}
            } else if !is_loading {
                div {
                    class: "step-list__empty",
                    "Enter a rule chain id to start editing."
                }
            }
        }
    }
}
