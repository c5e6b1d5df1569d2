//! Plain display models computed from domain types.

pub mod step_form;
pub mod step_item;

pub use step_form::{PrivateForm, StepForm, StepFormBody, INPUT_SOURCES};
pub use step_item::{truncate_description, StepItemView, DESCRIPTION_MAX_CHARS};
