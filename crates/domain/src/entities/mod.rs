//! Domain entities - Core business objects with identity

mod chain_step;
mod task_type;

pub use chain_step::{
    ChainStep, PrivateStepConfig, StepBody, StepDraft, StepKind, TemplateRef,
    DEFAULT_INPUT_SOURCE,
};
pub use task_type::TaskType;
