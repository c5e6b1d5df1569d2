//! Add Step Bar - Append a private step or attach a template

use dioxus::prelude::*;

use novelist_domain::{TaskType, TemplateRef};

use crate::application::dto::StepTemplateSummary;

#[derive(Props, Clone, PartialEq)]
pub struct AddStepBarProps {
    pub templates: Vec<StepTemplateSummary>,
    pub on_add_private: EventHandler<TaskType>,
    pub on_attach_template: EventHandler<TemplateRef>,
}

#[component]
pub fn AddStepBar(props: AddStepBarProps) -> Element {
    let mut task_type = use_signal(|| TaskType::Summarize.as_str().to_string());
    let mut template_id: Signal<Option<i64>> = use_signal(|| None);

    let on_add_private = props.on_add_private;
    let on_attach_template = props.on_attach_template;

    let selected_id = *template_id.read();
    let selected_template = selected_id
        .and_then(|id| props.templates.iter().find(|t| t.id.get() == id))
        .map(StepTemplateSummary::to_ref);

    rsx! {
        div {
            class: "add-step-bar",

            div {
                class: "add-step-bar__group",
                select {
                    value: "{task_type.read()}",
                    onchange: move |e| task_type.set(e.value()),
                    for known in TaskType::known() {
                        option {
                            value: "{known.as_str()}",
                            "{known.display_name()}"
                        }
                    }
                }
                button {
                    class: "button",
                    onclick: move |_| {
                        let selected = TaskType::from(task_type.read().as_str());
                        on_add_private.call(selected);
                    },
                    "+ Private step"
                }
            }

            div {
                class: "add-step-bar__group",
                select {
                    disabled: props.templates.is_empty(),
                    onchange: move |e| template_id.set(e.value().parse().ok()),
                    option { value: "", "Choose a template…" }
                    for template in props.templates.iter() {
                        option {
                            value: "{template.id}",
                            title: template.description.clone().unwrap_or_default(),
                            "{template.name}"
                        }
                    }
                }
                button {
                    class: "button",
                    disabled: selected_template.is_none(),
                    onclick: move |_| {
                        if let Some(template) = selected_template.clone() {
                            on_attach_template.call(template);
                        }
                    },
                    "+ Attach template"
                }
            }
        }
    }
}
