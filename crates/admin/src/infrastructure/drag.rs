//! In-memory drag coordinator for a vertical list.
//!
//! Driven by HTML drag events from the step list: `dragstart` on a handle
//! calls `begin`, `dragover` on a row calls `hover`, `drop` calls `finish`,
//! and a `dragend` that arrives while still dragging calls `cancel`.

use std::collections::HashMap;

use novelist_domain::StepTempId;

use crate::ports::outbound::{DragCoordinator, DragFeedback, DragOutcome};

/// Opacity of the row being dragged.
const ACTIVE_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DragPhase {
    #[default]
    Idle,
    Dragging {
        active: StepTempId,
        origin: usize,
        over: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ListDragCoordinator {
    slots: HashMap<StepTempId, usize>,
    phase: DragPhase,
}

impl ListDragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_slot(&self, index: usize) -> usize {
        index.min(self.slots.len().saturating_sub(1))
    }
}

impl DragCoordinator for ListDragCoordinator {
    fn register(&mut self, id: StepTempId, index: usize) {
        self.slots.insert(id, index);
    }

    fn unregister(&mut self, id: StepTempId) {
        self.slots.remove(&id);
        if matches!(self.phase, DragPhase::Dragging { active, .. } if active == id) {
            self.phase = DragPhase::Idle;
        }
    }

    fn registered(&self) -> Vec<StepTempId> {
        self.slots.keys().copied().collect()
    }

    fn begin(&mut self, id: StepTempId) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(&origin) = self.slots.get(&id) else {
            return false;
        };
        self.phase = DragPhase::Dragging {
            active: id,
            origin,
            over: origin,
        };
        true
    }

    fn hover_changes(&self, index: usize) -> bool {
        let slot = self.clamp_slot(index);
        matches!(self.phase, DragPhase::Dragging { over, .. } if over != slot)
    }

    fn hover(&mut self, index: usize) -> bool {
        let slot = self.clamp_slot(index);
        match &mut self.phase {
            DragPhase::Dragging { over, .. } if *over != slot => {
                *over = slot;
                true
            }
            _ => false,
        }
    }

    fn finish(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { origin, over, .. } if origin != over => DragOutcome::Reorder {
                from: origin,
                to: over,
            },
            _ => DragOutcome::NoChange,
        }
    }

    fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { .. } => DragOutcome::Cancelled,
            DragPhase::Idle => DragOutcome::NoChange,
        }
    }

    fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    fn feedback(&self, id: StepTempId) -> DragFeedback {
        let DragPhase::Dragging {
            active,
            origin,
            over,
        } = self.phase
        else {
            return DragFeedback::IDLE;
        };
        if id == active {
            return DragFeedback {
                slot_shift: over as i32 - origin as i32,
                opacity: ACTIVE_OPACITY,
                is_active: true,
            };
        }
        let Some(&index) = self.slots.get(&id) else {
            return DragFeedback::IDLE;
        };
        let slot_shift = if origin < over && index > origin && index <= over {
            -1
        } else if over < origin && index >= over && index < origin {
            1
        } else {
            0
        };
        DragFeedback {
            slot_shift,
            ..DragFeedback::IDLE
        }
    }
}
