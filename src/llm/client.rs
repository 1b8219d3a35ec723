use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope, ResponseFormat,
};
use crate::config::{ApiKey, env_value};
use crate::text::snippet;

const API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_TOKENS: u32 = 600;
const TEMPERATURE: f32 = 0.2;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY not set. Get one at https://platform.openai.com/api-keys")]
    ApiKeyNotSet,

    #[error("LLM rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("LLM API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("model produced no content (finish reason: {finish_reason})")]
    EmptyCompletion { finish_reason: String },

    #[error("model returned malformed JSON")]
    MalformedJson { raw: String },
}

/// Chat model asked for a single JSON object.
/// Implemented by `OpenAiClient` for production; mock implementations used in tests.
pub trait ChatModel {
    /// Returns the trimmed reply text; an empty reply is `LlmError::EmptyCompletion`.
    fn complete_json(&self, prompt: &str) -> impl Future<Output = Result<String, LlmError>> + Send;
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn from_env(http: Client) -> Result<Self, LlmError> {
        let api_key = env_value("OPENAI_API_KEY").ok_or(LlmError::ApiKeyNotSet)?;
        let model = env_value("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            http,
            api_key: ApiKey::new(api_key),
            model,
            base_url: API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: ApiKey::new("test-key"),
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, prompt: &str) -> Result<ChatCompletionResponse, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            response_format: ResponseFormat::json_object(),
        };

        debug_assert!(
            url.starts_with("https://") || cfg!(test),
            "API key must only be sent over HTTPS"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            warn!("LLM API rate limited");
            return Err(LlmError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("HTTP {status}: {}", snippet(&text)));
            warn!(status = %status, "LLM API error");
            return Err(LlmError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response.json().await?;
        if let Some(err) = body.error {
            let message = err
                .message
                .or(err.kind)
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(%message, "LLM API error in 200 response");
            return Err(LlmError::Api {
                code: status.as_u16(),
                message,
            });
        }

        debug!(model = %self.model, "chat completion received");
        Ok(body)
    }
}

impl ChatModel for OpenAiClient {
    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError> {
        let body = self.chat(prompt).await?;
        extract_reply(body)
    }
}

fn extract_reply(body: ChatCompletionResponse) -> Result<String, LlmError> {
    let choice = body.choices.and_then(|c| c.into_iter().next());
    let finish_reason = choice
        .as_ref()
        .and_then(|c| c.finish_reason.clone())
        .unwrap_or_else(|| "N/A".to_string());

    choice
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(LlmError::EmptyCompletion { finish_reason })
}
