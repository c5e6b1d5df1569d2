//! Application service errors

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use novelist_domain::DomainError;

use crate::ports::outbound::ApiError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Decode a raw JSON response into a typed DTO
pub trait ParseResponse {
    fn parse<T: DeserializeOwned>(self) -> Result<T, ServiceError>;
}

impl ParseResponse for Value {
    fn parse<T: DeserializeOwned>(self) -> Result<T, ServiceError> {
        serde_json::from_value(self)
            .map_err(|e| ServiceError::Api(ApiError::Decode(e.to_string())))
    }
}
