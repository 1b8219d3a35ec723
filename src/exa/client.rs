use std::future::Future;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::{
    ApiError, ContentsRequest, ContentsResponse, SearchRequest, SearchResponse, SearchResult,
};
use crate::config::{ApiKey, env_value};
use crate::text::snippet;

const API_BASE: &str = "https://api.exa.ai";

#[derive(Debug, thiserror::Error)]
pub enum ExaError {
    #[error("EXA_API_KEY not set. Get one at https://dashboard.exa.ai/api-keys")]
    ApiKeyNotSet,

    #[error("Exa rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("Exa rejected the API key: {0}")]
    Unauthorized(String),

    #[error("Exa API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Search backend used by the news pipeline.
/// Implemented by `ExaClient` for production; mock implementations used in tests.
pub trait SearchProvider {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<SearchResult>, ExaError>> + Send;

    /// Full document text for one result id, `None` when the provider has none.
    fn contents(&self, id: &str) -> impl Future<Output = Result<Option<String>, ExaError>> + Send;
}

#[derive(Clone)]
pub struct ExaClient {
    http: Client,
    api_key: ApiKey,
    base_url: String,
}

impl ExaClient {
    pub fn from_env(http: Client) -> Result<Self, ExaError> {
        let api_key = env_value("EXA_API_KEY").ok_or(ExaError::ApiKeyNotSet)?;
        Ok(Self {
            http,
            api_key: ApiKey::new(api_key),
            base_url: API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: ApiKey::new("test-key"),
            base_url: base_url.to_string(),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ExaError> {
        let url = format!("{}{path}", self.base_url);

        debug_assert!(
            url.starts_with("https://") || cfg!(test),
            "API key must only be sent over HTTPS"
        );

        let response = self
            .http
            .post(&url)
            .header("x-api-key", self.api_key.expose())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiError>(&text)
            .ok()
            .and_then(ApiError::into_message)
            .unwrap_or_else(|| format!("HTTP {status}: {}", snippet(&text)));

        warn!(status = %status, path, "Exa API error");
        Err(match status.as_u16() {
            429 => ExaError::RateLimited,
            401 | 403 => ExaError::Unauthorized(message),
            code => ExaError::Api { code, message },
        })
    }
}

impl SearchProvider for ExaClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, ExaError> {
        let body: SearchResponse = self.post_json("/search", request).await?;
        debug!(query = %request.query, results = body.results.len(), "exa search complete");
        Ok(body.results)
    }

    async fn contents(&self, id: &str) -> Result<Option<String>, ExaError> {
        let ids = [id];
        let request = ContentsRequest {
            ids: &ids,
            text: true,
        };
        let body: ContentsResponse = self.post_json("/contents", &request).await?;
        Ok(body
            .results
            .into_iter()
            .find(|item| item.id == id || item.id.is_empty())
            .and_then(|item| item.text)
            .filter(|text| !text.trim().is_empty()))
    }
}
