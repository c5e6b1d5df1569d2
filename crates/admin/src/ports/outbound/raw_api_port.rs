//! Raw API Port - Object-safe HTTP boundary
//!
//! Services build paths and decode bodies themselves; the port only moves
//! JSON so it can be stored behind `Arc<dyn RawApiPort>`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, bad URL)
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
