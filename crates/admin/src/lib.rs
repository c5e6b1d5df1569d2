//! Novelist Admin crate.
//!
//! Desktop client for editing rule chains: UI, application services and
//! the infrastructure adapters behind them.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::AdminConfig;
pub use ui::{app, LaunchOptions};
