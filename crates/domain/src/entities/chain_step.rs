//! ChainStep entity - One configured action within a rule chain
//!
//! A step is either self-contained (`StepBody::Private`) or points at a
//! shared template (`StepBody::Template`). The fields both variants share
//! live on `ChainStep` itself so the body never duplicates them.
//!
//! # Identity
//!
//! - `temp_id` identifies the step for the lifetime of an editing session.
//!   It is generated client-side and never persisted.
//! - `db_id` is the backend's identifier. It is only present for steps that
//!   came back from a load and cannot be changed by any editing operation.

use serde_json::{Map, Value};

use super::TaskType;
use crate::error::DomainError;
use crate::ids::{StepDbId, StepTempId, TemplateId};

/// Input source used for new private steps.
pub const DEFAULT_INPUT_SOURCE: &str = "previous_step";

/// Discriminant of `StepBody`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Private,
    Template,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Template => "template",
        }
    }
}

/// Configuration of a self-contained step.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateStepConfig {
    pub task_type: TaskType,
    pub parameters: Map<String, Value>,
    pub custom_instruction: Option<String>,
    pub post_processing_rules: Vec<String>,
    pub input_source: String,
    pub model_id: Option<String>,
    pub llm_overrides: Option<Map<String, Value>>,
    pub constraints: Option<Map<String, Value>>,
    pub output_variable: Option<String>,
}

impl PrivateStepConfig {
    pub fn new(task_type: TaskType) -> Self {
        Self {
            task_type,
            parameters: Map::new(),
            custom_instruction: None,
            post_processing_rules: Vec::new(),
            input_source: DEFAULT_INPUT_SOURCE.to_string(),
            model_id: None,
            llm_overrides: None,
            constraints: None,
            output_variable: None,
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    pub fn with_custom_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.custom_instruction = Some(instruction.into());
        self
    }

    pub fn with_post_processing_rule(mut self, rule: impl Into<String>) -> Self {
        self.post_processing_rules.push(rule.into());
        self
    }

    pub fn with_input_source(mut self, source: impl Into<String>) -> Self {
        self.input_source = source.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_output_variable(mut self, variable: impl Into<String>) -> Self {
        self.output_variable = Some(variable.into());
        self
    }
}

/// Reference to a separately stored step template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub template_id: TemplateId,
    /// Template name, captured when the reference was attached
    pub name: String,
}

impl TemplateRef {
    pub fn new(template_id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            template_id,
            name: name.into(),
        }
    }
}

/// Variant-specific payload of a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepBody {
    Private(PrivateStepConfig),
    Template(TemplateRef),
}

impl StepBody {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Private(_) => StepKind::Private,
            Self::Template(_) => StepKind::Template,
        }
    }
}

/// Editable fields of a step, used to seed and commit the edit surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDraft {
    pub enabled: bool,
    pub description: Option<String>,
    pub body: StepBody,
}

/// A step in a rule chain's editable step list
///
/// # Invariants
///
/// - `temp_id` never changes after construction
/// - `db_id` is only set through `ChainStep::restored`
/// - `order` is maintained by the owning `StepList`
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStep {
    temp_id: StepTempId,
    order: u32,
    enabled: bool,
    description: Option<String>,
    db_id: Option<StepDbId>,
    body: StepBody,
}

impl ChainStep {
    /// Create a brand-new step that has never been saved.
    pub fn new(body: StepBody) -> Self {
        Self {
            temp_id: StepTempId::new(),
            order: 0,
            enabled: true,
            description: None,
            db_id: None,
            body,
        }
    }

    /// Rebuild a step the backend returned. A fresh `temp_id` is assigned
    /// because session identity does not survive a reload.
    pub fn restored(
        db_id: Option<StepDbId>,
        enabled: bool,
        description: Option<String>,
        body: StepBody,
    ) -> Self {
        Self {
            temp_id: StepTempId::new(),
            order: 0,
            enabled,
            description,
            db_id,
            body,
        }
    }

    // Read accessors
    pub fn temp_id(&self) -> StepTempId {
        self.temp_id
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn db_id(&self) -> Option<StepDbId> {
        self.db_id
    }

    pub fn body(&self) -> &StepBody {
        &self.body
    }

    pub fn kind(&self) -> StepKind {
        self.body.kind()
    }

    // Builder methods
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Structural copy with a fresh `temp_id` and no `db_id`.
    pub fn duplicate(&self) -> Self {
        Self {
            temp_id: StepTempId::new(),
            db_id: None,
            ..self.clone()
        }
    }

    /// Snapshot of the editable fields.
    pub fn draft(&self) -> StepDraft {
        StepDraft {
            enabled: self.enabled,
            description: self.description.clone(),
            body: self.body.clone(),
        }
    }

    /// Replace the editable fields, keeping identity and position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the draft is of the other variant.
    pub fn apply_draft(&mut self, draft: StepDraft) -> Result<(), DomainError> {
        if draft.body.kind() != self.kind() {
            return Err(DomainError::validation(format!(
                "Cannot change a {} step into a {} step",
                self.kind().as_str(),
                draft.body.kind().as_str()
            )));
        }
        self.enabled = draft.enabled;
        self.description = draft.description.filter(|d| !d.trim().is_empty());
        self.body = draft.body;
        Ok(())
    }

    pub(crate) fn with_fresh_temp_id(mut self) -> Self {
        self.temp_id = StepTempId::new();
        self
    }

    pub(crate) fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.enabled, enabled)
    }
}
