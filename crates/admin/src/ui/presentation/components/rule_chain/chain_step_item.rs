//! Chain Step Item - One row of the step list
//!
//! Renders a step with its kind icon, label, disabled badge and description,
//! plus an actions menu. Dragging the handle moves the row visually; the
//! final `DragOutcome` goes to `on_drag_end` for the list to commit.

use dioxus::prelude::*;

use novelist_domain::{ChainStep, StepKind, StepTempId};

use crate::ports::outbound::{DragCoordinator, DragOutcome};
use crate::ui::presentation::view_models::StepItemView;

/// Fixed row height; drag feedback shifts rows by whole multiples of it.
pub const ROW_HEIGHT_PX: f32 = 64.0;

#[derive(Props, Clone, PartialEq)]
pub struct ChainStepItemProps {
    pub step: ChainStep,
    pub index: usize,
    pub drag: Signal<Box<dyn DragCoordinator>>,
    pub on_edit: EventHandler<StepTempId>,
    pub on_duplicate: EventHandler<StepTempId>,
    pub on_remove: EventHandler<StepTempId>,
    pub on_toggle_enabled: EventHandler<(StepTempId, bool)>,
    pub on_drag_end: EventHandler<DragOutcome>,
}

#[component]
pub fn ChainStepItem(props: ChainStepItemProps) -> Element {
    let view = StepItemView::from_step(&props.step, props.index);
    let mut menu_open = use_signal(|| false);
    let mut drag = props.drag;

    let id = view.temp_id;
    let index = props.index;
    let on_edit = props.on_edit;
    let on_duplicate = props.on_duplicate;
    let on_remove = props.on_remove;
    let on_toggle_enabled = props.on_toggle_enabled;
    let on_drag_end = props.on_drag_end;

    let (feedback, drag_active) = {
        let coordinator = drag.read();
        (coordinator.feedback(id), coordinator.is_dragging())
    };
    // While a drag is active the shifted content must not capture drag
    // events, so hovering always resolves to the row's fixed slot.
    let content_style = format!(
        "{}{}",
        feedback.style(ROW_HEIGHT_PX),
        if drag_active { " pointer-events: none;" } else { "" }
    );

    let mut row_class = String::from("step-row");
    if view.disabled {
        row_class.push_str(" step-row--disabled");
    }
    if feedback.is_active {
        row_class.push_str(" step-row--dragging");
    }
    let kind_class = match view.kind {
        StepKind::Private => "step-kind step-kind--private",
        StepKind::Template => "step-kind step-kind--template",
    };
    let tooltip = if view.is_truncated() {
        view.description_full.clone()
    } else {
        None
    };
    let enabled = !view.disabled;

    rsx! {
        div {
            class: "{row_class}",
            style: "height: {ROW_HEIGHT_PX}px;",
            ondragover: move |evt| {
                evt.prevent_default();
                // Fires continuously; only a slot change needs a write
                if drag.peek().hover_changes(index) {
                    drag.write().hover(index);
                }
            },
            ondrop: move |evt| {
                evt.prevent_default();
                let outcome = drag.write().finish();
                on_drag_end.call(outcome);
            },

            div {
                class: "step-row__content",
                style: "{content_style}",

                span {
                    class: "step-handle",
                    draggable: "true",
                    title: "Drag to reorder",
                    ondragstart: move |_| {
                        menu_open.set(false);
                        if !drag.write().begin(id) {
                            tracing::debug!(step = %id, "Drag not started");
                        }
                    },
                    ondragend: move |_| {
                        if drag.peek().is_dragging() {
                            let outcome = drag.write().cancel();
                            on_drag_end.call(outcome);
                        }
                    },
                    "⠿"
                }

                span { class: "step-position", "{view.position}" }

                span {
                    class: "{kind_class}",
                    title: "{view.kind_label} step",
                    "{view.icon}"
                }

                div {
                    class: "step-body",
                    div {
                        class: "step-label",
                        "{view.label}"
                        if view.disabled {
                            span { class: "step-badge", "Disabled" }
                        }
                    }
                    if let Some(description) = view.description.as_ref() {
                        div {
                            class: "step-description",
                            title: tooltip,
                            "{description}"
                        }
                    }
                }

                div {
                    class: "step-menu",
                    button {
                        class: "step-menu__toggle",
                        title: "Step actions",
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        "⋮"
                    }
                    if *menu_open.read() {
                        div {
                            class: "step-menu__items",
                            button {
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_edit.call(id);
                                },
                                "Edit"
                            }
                            button {
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_duplicate.call(id);
                                },
                                "Duplicate"
                            }
                            button {
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_toggle_enabled.call((id, !enabled));
                                },
                                if enabled { "Disable" } else { "Enable" }
                            }
                            button {
                                class: "step-menu__danger",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_remove.call(id);
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
