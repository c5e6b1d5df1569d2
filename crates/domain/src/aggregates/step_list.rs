//! StepList aggregate - The ordered steps of a rule chain being edited
//!
//! # Invariants
//!
//! - Every step's `temp_id` is unique within the list
//! - `steps[i].order() == i` after every mutation
//! - No mutation sets or changes a step's `db_id`
//!
//! Mutations addressed by `temp_id` never fail: an unknown id yields
//! `StepListChange::NotFound` and leaves the list untouched.

use crate::entities::{ChainStep, PrivateStepConfig, StepBody, StepDraft, TemplateRef};
use crate::error::DomainError;
use crate::events::StepListChange;
use crate::ids::StepTempId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepList {
    steps: Vec<ChainStep>,
}

impl StepList {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from steps in display order.
    ///
    /// Any repeated `temp_id` is replaced so the uniqueness invariant holds,
    /// and `order` is recomputed from position.
    pub fn from_steps(steps: Vec<ChainStep>) -> Self {
        let mut list = Self {
            steps: Vec::with_capacity(steps.len()),
        };
        for mut step in steps {
            while list.position(step.temp_id()).is_some() {
                step = step.with_fresh_temp_id();
            }
            list.steps.push(step);
        }
        list.reindex();
        list
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChainStep> {
        self.steps.iter()
    }

    pub fn get(&self, temp_id: StepTempId) -> Option<&ChainStep> {
        self.steps.iter().find(|s| s.temp_id() == temp_id)
    }

    pub fn position(&self, temp_id: StepTempId) -> Option<usize> {
        self.steps.iter().position(|s| s.temp_id() == temp_id)
    }

    pub fn temp_ids(&self) -> Vec<StepTempId> {
        self.steps.iter().map(ChainStep::temp_id).collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new private step.
    pub fn add_private(&mut self, config: PrivateStepConfig) -> StepListChange {
        self.append(ChainStep::new(StepBody::Private(config)))
    }

    /// Append a reference to a shared template.
    pub fn attach_template(&mut self, template: TemplateRef) -> StepListChange {
        self.append(ChainStep::new(StepBody::Template(template)))
    }

    /// Remove the step with this id.
    pub fn remove(&mut self, temp_id: StepTempId) -> StepListChange {
        let Some(index) = self.position(temp_id) else {
            return StepListChange::NotFound { temp_id };
        };
        self.steps.remove(index);
        self.reindex();
        StepListChange::Removed { temp_id, index }
    }

    /// Insert a copy of the step directly after it.
    pub fn duplicate(&mut self, temp_id: StepTempId) -> StepListChange {
        let Some(index) = self.position(temp_id) else {
            return StepListChange::NotFound { temp_id };
        };
        let mut copy = self.steps[index].duplicate();
        while self.position(copy.temp_id()).is_some() {
            copy = copy.with_fresh_temp_id();
        }
        let copy_id = copy.temp_id();
        self.steps.insert(index + 1, copy);
        self.reindex();
        StepListChange::Duplicated {
            source: temp_id,
            copy: copy_id,
            index: index + 1,
        }
    }

    /// Commit an edit to the step with this id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the draft is of the other step
    /// variant. The step is left untouched in that case.
    pub fn apply_edit(
        &mut self,
        temp_id: StepTempId,
        draft: StepDraft,
    ) -> Result<StepListChange, DomainError> {
        let Some(step) = self.steps.iter_mut().find(|s| s.temp_id() == temp_id) else {
            return Ok(StepListChange::NotFound { temp_id });
        };
        step.apply_draft(draft)?;
        Ok(StepListChange::Edited { temp_id })
    }

    /// Enable or disable the step with this id.
    pub fn set_enabled(&mut self, temp_id: StepTempId, enabled: bool) -> StepListChange {
        let Some(step) = self.steps.iter_mut().find(|s| s.temp_id() == temp_id) else {
            return StepListChange::NotFound { temp_id };
        };
        if step.set_enabled(enabled) == enabled {
            return StepListChange::Unchanged;
        }
        StepListChange::EnabledChanged { temp_id, enabled }
    }

    /// Move the step at `from` to `to`, shifting the steps in between by one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if either index is not a
    /// current position. The list is left untouched in that case.
    pub fn move_step(&mut self, from: usize, to: usize) -> Result<StepListChange, DomainError> {
        let len = self.steps.len();
        if from >= len {
            return Err(DomainError::index_out_of_range(from, len));
        }
        if to >= len {
            return Err(DomainError::index_out_of_range(to, len));
        }
        if from == to {
            return Ok(StepListChange::Unchanged);
        }
        let step = self.steps.remove(from);
        let temp_id = step.temp_id();
        self.steps.insert(to, step);
        self.reindex();
        Ok(StepListChange::Moved { temp_id, from, to })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn append(&mut self, step: ChainStep) -> StepListChange {
        let temp_id = step.temp_id();
        self.steps.push(step);
        let index = self.steps.len() - 1;
        self.reindex();
        StepListChange::Added { temp_id, index }
    }

    fn reindex(&mut self) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.set_order(i as u32);
        }
    }
}

impl<'a> IntoIterator for &'a StepList {
    type Item = &'a ChainStep;
    type IntoIter = std::slice::Iter<'a, ChainStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
