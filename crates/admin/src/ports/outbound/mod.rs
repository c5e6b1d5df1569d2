//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services and components to interact with external
//! systems without depending on concrete implementations.

pub mod drag_port;
pub mod raw_api_port;

pub use drag_port::{commit_drag, DragCoordinator, DragFeedback, DragOutcome};
pub use raw_api_port::{ApiError, RawApiPort};

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
