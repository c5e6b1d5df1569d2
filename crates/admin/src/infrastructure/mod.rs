//! Infrastructure adapters for the outbound ports.

pub mod drag;
pub mod http_client;

pub use drag::ListDragCoordinator;
pub use http_client::ApiAdapter;
