pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;

pub use aggregates::StepList;

pub use entities::{
    ChainStep, PrivateStepConfig, StepBody, StepDraft, StepKind, TaskType, TemplateRef,
    DEFAULT_INPUT_SOURCE,
};

pub use error::DomainError;
pub use events::StepListChange;

pub use ids::{RuleChainId, StepDbId, StepTempId, TemplateId};
