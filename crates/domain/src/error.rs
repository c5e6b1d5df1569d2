//! Unified error types for the domain layer
//!
//! Only a handful of step-list operations can fail. Unknown step ids are
//! reported through `StepListChange::NotFound`, never through this type.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A list position outside the current bounds
    #[error("Index {index} out of range for list of {len} steps")]
    IndexOutOfRange { index: usize, len: usize },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rejected field values or edits.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Template name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an out-of-range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
