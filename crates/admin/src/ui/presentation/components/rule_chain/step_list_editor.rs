//! Step List Editor - The ordered list of steps in a rule chain
//!
//! Owns no data itself: the list lives in `RuleChainState`. This component
//! keeps drag registrations in line with the list and turns row callbacks
//! into list mutations.

use dioxus::prelude::*;

use novelist_domain::{PrivateStepConfig, StepDraft, StepTempId};

use super::{AddStepBar, ChainStepItem, StepEditModal};
use crate::ports::outbound::{commit_drag, DragOutcome};
use crate::ui::presentation::state::RuleChainState;

#[component]
pub fn StepListEditor() -> Element {
    let mut state = use_context::<RuleChainState>();
    let mut editing: Signal<Option<StepTempId>> = use_signal(|| None);
    let mut drag = state.drag;

    // Every row is registered at its current index whenever the list changes
    use_effect(move || {
        let ids = state.steps.read().temp_ids();
        drag.write().sync(&ids);
    });

    let rows: Vec<_> = state
        .steps
        .read()
        .iter()
        .enumerate()
        .map(|(index, step)| (step.temp_id(), index, step.clone()))
        .collect();
    let is_empty = rows.is_empty();
    let templates = state.templates.read().clone();
    let editing_step = editing().and_then(|id| state.steps.read().get(id).cloned());

    rsx! {
        div {
            class: "step-list",

            if is_empty {
                div {
                    class: "step-list__empty",
                    "No steps yet. Add a private step or attach a template below."
                }
            }

            for (row_id, index, step) in rows {
                ChainStepItem {
                    key: "{row_id}",
                    step,
                    index,
                    drag,
                    on_edit: move |id| editing.set(Some(id)),
                    on_duplicate: move |id| {
                        state.apply(|list| list.duplicate(id));
                    },
                    on_remove: move |id| {
                        if editing() == Some(id) {
                            editing.set(None);
                        }
                        state.apply(|list| list.remove(id));
                    },
                    on_toggle_enabled: move |(id, enabled): (StepTempId, bool)| {
                        state.apply(|list| list.set_enabled(id, enabled));
                    },
                    on_drag_end: move |outcome: DragOutcome| {
                        state.try_apply(|list| commit_drag(list, outcome));
                    },
                }
            }
        }

        AddStepBar {
            templates,
            on_add_private: move |task_type| {
                state.apply(|list| list.add_private(PrivateStepConfig::new(task_type)));
            },
            on_attach_template: move |template| {
                state.apply(|list| list.attach_template(template));
            },
        }

        if let Some(step) = editing_step {
            StepEditModal {
                step,
                on_close: move |_| editing.set(None),
                on_save: move |draft: StepDraft| {
                    let Some(id) = editing() else {
                        return;
                    };
                    if state.try_apply(|list| list.apply_edit(id, draft)).is_some() {
                        editing.set(None);
                    }
                },
            }
        }
    }
}
