//! Edit form model for a single step
//!
//! Holds the text the modal edits and turns it back into a `StepDraft`.
//! The variant is fixed by the step being edited.

use serde_json::{Map, Value};

use novelist_domain::{
    ChainStep, DomainError, PrivateStepConfig, StepBody, StepDraft, TaskType, TemplateRef,
    DEFAULT_INPUT_SOURCE,
};

/// Input sources offered in the editor, as `(value, label)`.
pub const INPUT_SOURCES: [(&str, &str); 3] = [
    ("previous_step", "Previous step output"),
    ("chapter_text", "Chapter text"),
    ("original_text", "Original text"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct StepForm {
    pub enabled: bool,
    pub description: String,
    pub body: StepFormBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepFormBody {
    Private(PrivateForm),
    /// Template references are not editable beyond the shared fields
    Template(TemplateRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrivateForm {
    pub task_type: String,
    pub custom_instruction: String,
    pub input_source: String,
    pub model_id: String,
    pub output_variable: String,
    /// One rule per line
    pub post_processing_rules: String,
    /// JSON object text
    pub parameters: String,
    // Not exposed in the form, carried through unchanged
    llm_overrides: Option<Map<String, Value>>,
    constraints: Option<Map<String, Value>>,
}

impl StepForm {
    pub fn from_step(step: &ChainStep) -> Self {
        let body = match step.body() {
            StepBody::Private(config) => StepFormBody::Private(PrivateForm::from_config(config)),
            StepBody::Template(template) => StepFormBody::Template(template.clone()),
        };
        Self {
            enabled: step.is_enabled(),
            description: step.description().unwrap_or_default().to_string(),
            body,
        }
    }

    pub fn private_mut(&mut self) -> Option<&mut PrivateForm> {
        match &mut self.body {
            StepFormBody::Private(form) => Some(form),
            StepFormBody::Template(_) => None,
        }
    }

    /// Validate the form and build the draft to commit.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank task type, `Parse` when parameters are not a
    /// JSON object.
    pub fn to_draft(&self) -> Result<StepDraft, DomainError> {
        let body = match &self.body {
            StepFormBody::Private(form) => StepBody::Private(form.to_config()?),
            StepFormBody::Template(template) => StepBody::Template(template.clone()),
        };
        Ok(StepDraft {
            enabled: self.enabled,
            description: non_blank(&self.description),
            body,
        })
    }
}

impl PrivateForm {
    fn from_config(config: &PrivateStepConfig) -> Self {
        let parameters = if config.parameters.is_empty() {
            String::new()
        } else {
            serde_json::to_string_pretty(&config.parameters).unwrap_or_default()
        };
        Self {
            task_type: config.task_type.as_str().to_string(),
            custom_instruction: config.custom_instruction.clone().unwrap_or_default(),
            input_source: config.input_source.clone(),
            model_id: config.model_id.clone().unwrap_or_default(),
            output_variable: config.output_variable.clone().unwrap_or_default(),
            post_processing_rules: config.post_processing_rules.join("\n"),
            parameters,
            llm_overrides: config.llm_overrides.clone(),
            constraints: config.constraints.clone(),
        }
    }

    fn to_config(&self) -> Result<PrivateStepConfig, DomainError> {
        let task_type = self.task_type.trim();
        if task_type.is_empty() {
            return Err(DomainError::validation("Task type is required"));
        }

        Ok(PrivateStepConfig {
            task_type: TaskType::from(task_type),
            parameters: parse_parameters(&self.parameters)?,
            custom_instruction: non_blank(&self.custom_instruction),
            post_processing_rules: self
                .post_processing_rules
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            input_source: non_blank(&self.input_source)
                .unwrap_or_else(|| DEFAULT_INPUT_SOURCE.to_string()),
            model_id: non_blank(&self.model_id),
            llm_overrides: self.llm_overrides.clone(),
            constraints: self.constraints.clone(),
            output_variable: non_blank(&self.output_variable),
        })
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_parameters(text: &str) -> Result<Map<String, Value>, DomainError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::parse("Parameters must be a JSON object")),
        Err(e) => Err(DomainError::parse(format!("Invalid parameters JSON: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novelist_domain::{StepList, TemplateId};
    use serde_json::json;

    fn private_step() -> ChainStep {
        let mut config = PrivateStepConfig::new(TaskType::Rewrite)
            .with_parameter("tone", json!("wry"))
            .with_post_processing_rule("strip_markdown")
            .with_model_id("local-7b");
        config.constraints = Some(Map::from_iter([("maxTokens".to_string(), json!(512))]));
        ChainStep::new(StepBody::Private(config)).with_description("Polish dialogue")
    }

    #[test]
    fn untouched_form_reproduces_the_step() {
        let step = private_step();
        let draft = StepForm::from_step(&step).to_draft().unwrap();
        assert_eq!(draft, step.draft());
    }

    #[test]
    fn edits_flow_into_the_draft() {
        let step = private_step();
        let mut form = StepForm::from_step(&step);
        form.enabled = false;
        form.description = "  ".to_string();
        let private = form.private_mut().unwrap();
        private.task_type = "translate".to_string();
        private.post_processing_rules = "trim\n\n  dedupe  \n".to_string();
        private.input_source = String::new();
        private.model_id = " ".to_string();

        let draft = form.to_draft().unwrap();
        assert!(!draft.enabled);
        assert_eq!(draft.description, None);
        let StepBody::Private(config) = draft.body else {
            panic!("expected private body");
        };
        assert_eq!(config.task_type, TaskType::Translate);
        assert_eq!(config.post_processing_rules, vec!["trim", "dedupe"]);
        assert_eq!(config.input_source, DEFAULT_INPUT_SOURCE);
        assert_eq!(config.model_id, None);
        assert_eq!(config.constraints.unwrap()["maxTokens"], json!(512));
    }

    #[test]
    fn blank_task_type_is_rejected() {
        let mut form = StepForm::from_step(&private_step());
        form.private_mut().unwrap().task_type = " ".to_string();
        assert!(matches!(form.to_draft(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn parameters_must_be_a_json_object() {
        let mut form = StepForm::from_step(&private_step());
        form.private_mut().unwrap().parameters = "[1, 2]".to_string();
        assert!(matches!(form.to_draft(), Err(DomainError::Parse(_))));

        form.private_mut().unwrap().parameters = "{ not json".to_string();
        assert!(matches!(form.to_draft(), Err(DomainError::Parse(_))));

        form.private_mut().unwrap().parameters = String::new();
        let StepBody::Private(config) = form.to_draft().unwrap().body else {
            panic!("expected private body");
        };
        assert!(config.parameters.is_empty());
    }

    #[test]
    fn template_form_keeps_the_reference() {
        let template = TemplateRef::new(TemplateId::new(4), "Cast sweep");
        let step = ChainStep::new(StepBody::Template(template.clone()));
        let mut form = StepForm::from_step(&step);
        assert!(form.private_mut().is_none());

        form.description = "Shared across books".to_string();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.body, StepBody::Template(template));
        assert_eq!(draft.description.as_deref(), Some("Shared across books"));
    }

    #[test]
    fn committed_form_keeps_identity_in_the_list() {
        let mut list = StepList::new();
        list.add_private(PrivateStepConfig::new(TaskType::Summarize));
        let id = list.steps()[0].temp_id();

        let mut form = StepForm::from_step(&list.steps()[0]);
        form.description = "Chapter digest".to_string();
        list.apply_edit(id, form.to_draft().unwrap()).unwrap();

        assert_eq!(list.steps()[0].temp_id(), id);
        assert_eq!(list.steps()[0].description(), Some("Chapter digest"));
    }
}
