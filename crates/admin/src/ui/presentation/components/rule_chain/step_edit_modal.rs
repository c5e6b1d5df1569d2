//! Step Edit Modal - Edit one step in place
//!
//! Seeded from the step's current values. Saving hands a `StepDraft` to the
//! caller; the step's identity and position are not part of the form.

use dioxus::prelude::*;

use novelist_domain::{ChainStep, StepDraft, TaskType};

use crate::ui::presentation::view_models::{StepForm, StepFormBody, INPUT_SOURCES};

#[derive(Props, Clone, PartialEq)]
pub struct StepEditModalProps {
    pub step: ChainStep,
    pub on_close: EventHandler<()>,
    pub on_save: EventHandler<StepDraft>,
}

#[component]
pub fn StepEditModal(props: StepEditModalProps) -> Element {
    let mut form = use_signal(|| StepForm::from_step(&props.step));
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let on_close = props.on_close;
    let on_save = props.on_save;

    let save = move |_| match form.read().to_draft() {
        Ok(draft) => {
            error_message.set(None);
            on_save.call(draft);
        }
        Err(e) => error_message.set(Some(e.to_string())),
    };

    let snapshot = form.read().clone();
    let title = match snapshot.body {
        StepFormBody::Private(_) => "Edit Private Step",
        StepFormBody::Template(_) => "Edit Template Step",
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: |e| e.stop_propagation(),

                // Header
                div {
                    class: "modal__header",
                    h2 { "{title}" }
                    button {
                        class: "modal__close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                if let Some(err) = error_message.read().as_ref() {
                    div { class: "modal__error", "{err}" }
                }

                div {
                    class: "modal__content",

                    label {
                        class: "field field--inline",
                        input {
                            r#type: "checkbox",
                            checked: snapshot.enabled,
                            onchange: move |e| form.write().enabled = e.checked(),
                        }
                        "Enabled"
                    }

                    div {
                        class: "field",
                        label { "Description" }
                        textarea {
                            rows: 2,
                            value: "{snapshot.description}",
                            placeholder: "What this step is for",
                            oninput: move |e| form.write().description = e.value(),
                        }
                    }

                    {match &snapshot.body {
                        StepFormBody::Private(private) => {
                            let private = private.clone();
                            let known = TaskType::known();
                            let is_known = known.iter().any(|t| t.as_str() == private.task_type);
                            rsx! {
                                div {
                                    class: "field",
                                    label { "Task type" }
                                    select {
                                        value: "{private.task_type}",
                                        onchange: move |e| {
                                            if let Some(p) = form.write().private_mut() {
                                                p.task_type = e.value();
                                            }
                                        },
                                        for task_type in known.iter() {
                                            option {
                                                value: "{task_type.as_str()}",
                                                selected: task_type.as_str() == private.task_type,
                                                "{task_type.display_name()}"
                                            }
                                        }
                                        if !is_known {
                                            option {
                                                value: "{private.task_type}",
                                                selected: true,
                                                "{private.task_type}"
                                            }
                                        }
                                    }
                                }

                                div {
                                    class: "field",
                                    label { "Custom instruction" }
                                    textarea {
                                        rows: 4,
                                        value: "{private.custom_instruction}",
                                        oninput: move |e| {
                                            if let Some(p) = form.write().private_mut() {
                                                p.custom_instruction = e.value();
                                            }
                                        },
                                    }
                                }

                                div {
                                    class: "field",
                                    label { "Input source" }
                                    select {
                                        value: "{private.input_source}",
                                        onchange: move |e| {
                                            if let Some(p) = form.write().private_mut() {
                                                p.input_source = e.value();
                                            }
                                        },
                                        for (value, label) in INPUT_SOURCES {
                                            option {
                                                value: "{value}",
                                                selected: value == private.input_source,
                                                "{label}"
                                            }
                                        }
                                    }
                                }

                                div {
                                    class: "field-row",
                                    div {
                                        class: "field",
                                        label { "Model" }
                                        input {
                                            r#type: "text",
                                            value: "{private.model_id}",
                                            placeholder: "Backend default",
                                            oninput: move |e| {
                                                if let Some(p) = form.write().private_mut() {
                                                    p.model_id = e.value();
                                                }
                                            },
                                        }
                                    }
                                    div {
                                        class: "field",
                                        label { "Output variable" }
                                        input {
                                            r#type: "text",
                                            value: "{private.output_variable}",
                                            oninput: move |e| {
                                                if let Some(p) = form.write().private_mut() {
                                                    p.output_variable = e.value();
                                                }
                                            },
                                        }
                                    }
                                }

                                div {
                                    class: "field",
                                    label { "Post-processing rules (one per line)" }
                                    textarea {
                                        rows: 3,
                                        value: "{private.post_processing_rules}",
                                        oninput: move |e| {
                                            if let Some(p) = form.write().private_mut() {
                                                p.post_processing_rules = e.value();
                                            }
                                        },
                                    }
                                }

                                div {
                                    class: "field",
                                    label { "Parameters (JSON object)" }
                                    textarea {
                                        class: "field__code",
                                        rows: 5,
                                        value: "{private.parameters}",
                                        oninput: move |e| {
                                            if let Some(p) = form.write().private_mut() {
                                                p.parameters = e.value();
                                            }
                                        },
                                    }
                                }
                            }
                        }
                        StepFormBody::Template(template) => rsx! {
                            div {
                                class: "field",
                                label { "Template" }
                                div {
                                    class: "field__readonly",
                                    "{template.name} (#{template.template_id})"
                                }
                            }
                        },
                    }}
                }

                // Footer
                div {
                    class: "modal__footer",
                    button {
                        class: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "button button--primary",
                        onclick: save,
                        "Save"
                    }
                }
            }
        }
    }
}
