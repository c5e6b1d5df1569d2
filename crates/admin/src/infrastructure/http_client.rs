//! HTTP adapter for the rule-chain backend (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiAdapter {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Request(format!("invalid path {path}: {e}")))
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// `Url::join` replaces the last segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "PUT");
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base: &str) -> ApiAdapter {
        ApiAdapter::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn paths_resolve_under_base_path() {
        let api = adapter("http://localhost:8000/backend");
        assert_eq!(
            api.url("/api/rule-chains/3").unwrap().as_str(),
            "http://localhost:8000/backend/api/rule-chains/3"
        );
    }

    #[test]
    fn paths_resolve_under_root() {
        let api = adapter("http://localhost:8000");
        assert_eq!(
            api.url("api/step-templates").unwrap().as_str(),
            "http://localhost:8000/api/step-templates"
        );
    }
}
