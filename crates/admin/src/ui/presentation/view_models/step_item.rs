//! Step item view model
//!
//! Everything a step row shows, derived from one `ChainStep` and its index.

use novelist_domain::{ChainStep, StepBody, StepKind, StepTempId};

/// Descriptions longer than this are cut in the list row.
pub const DESCRIPTION_MAX_CHARS: usize = 80;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq)]
pub struct StepItemView {
    pub temp_id: StepTempId,
    /// 1-based position shown next to the row
    pub position: usize,
    pub kind: StepKind,
    pub icon: &'static str,
    pub kind_label: &'static str,
    pub label: String,
    pub disabled: bool,
    /// Possibly truncated description for the row
    pub description: Option<String>,
    /// Untruncated description for the tooltip
    pub description_full: Option<String>,
}

impl StepItemView {
    pub fn from_step(step: &ChainStep, index: usize) -> Self {
        let (icon, kind_label, label) = match step.body() {
            StepBody::Private(config) => (
                "⚙",
                "Private",
                config.task_type.display_name().to_string(),
            ),
            StepBody::Template(template) => {
                let label = if template.name.trim().is_empty() {
                    format!("Template #{}", template.template_id)
                } else {
                    template.name.clone()
                };
                ("📋", "Template", label)
            }
        };

        let description_full = step
            .description()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Self {
            temp_id: step.temp_id(),
            position: index + 1,
            kind: step.kind(),
            icon,
            kind_label,
            label,
            disabled: !step.is_enabled(),
            description: description_full
                .as_deref()
                .map(|d| truncate_description(d, DESCRIPTION_MAX_CHARS)),
            description_full,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.description != self.description_full
    }
}

/// Cut `text` to at most `max_chars` characters followed by an ellipsis.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => {
            let mut cut = text[..byte_index].trim_end().to_string();
            cut.push(ELLIPSIS);
            cut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novelist_domain::{PrivateStepConfig, TaskType, TemplateId, TemplateRef};

    fn private(task_type: TaskType) -> ChainStep {
        ChainStep::new(StepBody::Private(PrivateStepConfig::new(task_type)))
    }

    #[test]
    fn private_step_uses_task_display_name() {
        let view = StepItemView::from_step(&private(TaskType::ExtractCharacters), 0);
        assert_eq!(view.label, "Extract Characters");
        assert_eq!(view.kind, StepKind::Private);
        assert_eq!(view.kind_label, "Private");
        assert_eq!(view.position, 1);
        assert!(!view.disabled);
    }

    #[test]
    fn unknown_task_type_shows_raw_value() {
        let view = StepItemView::from_step(&private(TaskType::from("score_prose")), 2);
        assert_eq!(view.label, "score_prose");
        assert_eq!(view.position, 3);
    }

    #[test]
    fn template_step_uses_template_name() {
        let step = ChainStep::new(StepBody::Template(TemplateRef::new(
            TemplateId::new(12),
            "Cast sweep",
        )));
        let view = StepItemView::from_step(&step, 1);
        assert_eq!(view.label, "Cast sweep");
        assert_eq!(view.kind_label, "Template");
        assert_ne!(view.icon, StepItemView::from_step(&private(TaskType::Custom), 0).icon);
    }

    #[test]
    fn unnamed_template_falls_back_to_id() {
        let step = ChainStep::new(StepBody::Template(TemplateRef::new(TemplateId::new(12), "")));
        assert_eq!(StepItemView::from_step(&step, 0).label, "Template #12");
    }

    #[test]
    fn disabled_step_is_flagged() {
        let step = private(TaskType::Summarize).with_enabled(false);
        assert!(StepItemView::from_step(&step, 0).disabled);
    }

    #[test]
    fn blank_description_is_hidden() {
        let step = private(TaskType::Summarize).with_description("   ");
        let view = StepItemView::from_step(&step, 0);
        assert_eq!(view.description, None);
        assert!(!view.is_truncated());
    }

    #[test]
    fn short_description_needs_no_tooltip() {
        let step = private(TaskType::Summarize).with_description("Condense the chapter");
        let view = StepItemView::from_step(&step, 0);
        assert_eq!(view.description.as_deref(), Some("Condense the chapter"));
        assert!(!view.is_truncated());
    }

    #[test]
    fn long_description_is_truncated_but_kept_in_full() {
        let long = "a".repeat(DESCRIPTION_MAX_CHARS + 20);
        let step = private(TaskType::Summarize).with_description(long.clone());
        let view = StepItemView::from_step(&step, 0);

        let shown = view.description.clone().unwrap();
        assert_eq!(shown.chars().count(), DESCRIPTION_MAX_CHARS + 1);
        assert!(shown.ends_with('…'));
        assert_eq!(view.description_full.as_deref(), Some(long.as_str()));
        assert!(view.is_truncated());
    }

    mod truncate {
        use super::*;

        #[test]
        fn short_text_is_untouched() {
            assert_eq!(truncate_description("Summarize", 80), "Summarize");
            assert_eq!(truncate_description("exact", 5), "exact");
        }

        #[test]
        fn cuts_on_char_boundaries() {
            assert_eq!(truncate_description("章节摘要生成", 4), "章节摘要…");
        }

        #[test]
        fn trailing_space_before_cut_is_dropped() {
            assert_eq!(truncate_description("one two three", 4), "one…");
        }
    }
}
