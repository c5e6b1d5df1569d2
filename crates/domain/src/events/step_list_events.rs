//! Step list mutation outcomes.

use crate::ids::StepTempId;

/// Outcome of a `StepList` mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepListChange {
    Added {
        temp_id: StepTempId,
        index: usize,
    },
    Removed {
        temp_id: StepTempId,
        index: usize,
    },
    Duplicated {
        source: StepTempId,
        copy: StepTempId,
        index: usize,
    },
    Edited {
        temp_id: StepTempId,
    },
    Moved {
        temp_id: StepTempId,
        from: usize,
        to: usize,
    },
    EnabledChanged {
        temp_id: StepTempId,
        enabled: bool,
    },
    /// The operation was valid but left the list as it was
    Unchanged,
    /// No step with this id; the list was left as it was
    NotFound {
        temp_id: StepTempId,
    },
}

impl StepListChange {
    /// Whether the list was modified.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Unchanged | Self::NotFound { .. })
    }
}
