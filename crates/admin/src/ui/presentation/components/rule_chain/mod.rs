//! Rule chain editing components

pub mod add_step_bar;
pub mod chain_step_item;
pub mod step_edit_modal;
pub mod step_list_editor;

pub use add_step_bar::AddStepBar;
pub use chain_step_item::ChainStepItem;
pub use step_edit_modal::StepEditModal;
pub use step_list_editor::StepListEditor;
