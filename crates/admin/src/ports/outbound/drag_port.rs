//! Drag coordination port
//!
//! The step list only needs two things from a drag/drop primitive: a way to
//! register each row under its `temp_id`, and a final `(from, to)` pair once
//! the gesture ends. Everything in between is visual feedback.

use novelist_domain::{DomainError, StepList, StepListChange, StepTempId};

/// Result of ending a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Commit a move of the step at `from` to `to`
    Reorder { from: usize, to: usize },
    /// Dropped where it started, or no drag was active
    NoChange,
    /// Aborted; the pre-drag order stands
    Cancelled,
}

/// Live visual state for one row.
///
/// `slot_shift` is measured in rows: the dragged row moves by the distance
/// to the hovered slot, rows it passes over move one slot the other way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFeedback {
    pub slot_shift: i32,
    pub opacity: f32,
    pub is_active: bool,
}

impl DragFeedback {
    pub const IDLE: Self = Self {
        slot_shift: 0,
        opacity: 1.0,
        is_active: false,
    };

    /// Inline CSS for a row `row_height` pixels tall.
    pub fn style(&self, row_height: f32) -> String {
        if *self == Self::IDLE {
            return String::new();
        }
        format!(
            "transform: translateY({}px); opacity: {}; transition: transform 150ms ease;",
            self.slot_shift as f32 * row_height,
            self.opacity
        )
    }
}

impl Default for DragFeedback {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Narrow interface over a drag/drop primitive. Ordering is only ever
/// committed from the outcome of `finish`.
pub trait DragCoordinator {
    /// Register a draggable row at its current display index.
    fn register(&mut self, id: StepTempId, index: usize);

    fn unregister(&mut self, id: StepTempId);

    /// Ids currently registered, in no particular order.
    fn registered(&self) -> Vec<StepTempId>;

    /// Start dragging `id`. Returns `false` if it is unknown or a drag is
    /// already active.
    fn begin(&mut self, id: StepTempId) -> bool;

    /// Whether `hover(index)` would move the hovered slot. Lets callers
    /// skip a write when the pointer stays over the same row.
    fn hover_changes(&self, index: usize) -> bool;

    /// Pointer is over the row at `index`. Returns `true` if the hovered
    /// slot moved.
    fn hover(&mut self, index: usize) -> bool;

    /// Drop at the last hovered slot.
    fn finish(&mut self) -> DragOutcome;

    /// Abort the active drag, if any.
    fn cancel(&mut self) -> DragOutcome;

    fn is_dragging(&self) -> bool;

    fn feedback(&self, id: StepTempId) -> DragFeedback;

    /// Re-register rows so that `ids[i]` sits at index `i`, dropping the rest.
    fn sync(&mut self, ids: &[StepTempId]) {
        for stale in self.registered() {
            if !ids.contains(&stale) {
                self.unregister(stale);
            }
        }
        for (index, id) in ids.iter().enumerate() {
            self.register(*id, index);
        }
    }
}

/// Apply the end of a drag gesture to the list. Only `Reorder` moves a step;
/// a cancelled or no-op gesture leaves the list exactly as it was.
pub fn commit_drag(
    list: &mut StepList,
    outcome: DragOutcome,
) -> Result<StepListChange, DomainError> {
    match outcome {
        DragOutcome::Reorder { from, to } => list.move_step(from, to),
        DragOutcome::NoChange | DragOutcome::Cancelled => Ok(StepListChange::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novelist_domain::{PrivateStepConfig, TaskType};

    fn list_of(n: usize) -> StepList {
        let mut list = StepList::new();
        for _ in 0..n {
            list.add_private(PrivateStepConfig::new(TaskType::Summarize));
        }
        list
    }

    #[test]
    fn cancelled_drag_leaves_list_untouched() {
        let mut list = list_of(3);
        let before = list.clone();

        let change = commit_drag(&mut list, DragOutcome::Cancelled).unwrap();

        assert_eq!(change, StepListChange::Unchanged);
        assert_eq!(list, before);
    }

    #[test]
    fn no_change_drop_leaves_list_untouched() {
        let mut list = list_of(2);
        let before = list.clone();
        commit_drag(&mut list, DragOutcome::NoChange).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn reorder_moves_the_step() {
        let mut list = list_of(3);
        let ids = list.temp_ids();

        let change = commit_drag(&mut list, DragOutcome::Reorder { from: 0, to: 2 }).unwrap();

        assert_eq!(
            change,
            StepListChange::Moved {
                temp_id: ids[0],
                from: 0,
                to: 2
            }
        );
        assert_eq!(list.temp_ids(), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn stale_reorder_is_rejected_without_touching_the_list() {
        let mut list = list_of(2);
        let before = list.clone();
        let err = commit_drag(&mut list, DragOutcome::Reorder { from: 0, to: 5 }).unwrap_err();
        assert!(matches!(err, DomainError::IndexOutOfRange { .. }));
        assert_eq!(list, before);
    }
}
