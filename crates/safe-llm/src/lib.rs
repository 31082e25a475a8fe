//! # safe-llm
//!
//! HTTP client for an OpenAI-compatible chat-completion service.
//!
//! SafeUse only ever asks it for a short prose gloss of a risk level that
//! has already been computed. Every request is bounded by the configured
//! timeout.

mod chat;
mod error;
mod http;

pub use chat::ChatMessage;
pub use error::LlmError;

use std::time::Duration;

use safe_config::LlmConfig;

use crate::chat::{ChatRequest, first_completion};
use crate::http::check_response;

/// Chat-completion client.
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl LlmClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when no key is configured, or
    /// [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        if !config.is_configured() {
            return Err(LlmError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("safeuse/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `messages` and return the first completion, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] if the request fails or times out, the service
    /// returns a non-success status, or the body carries no completion text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };
        tracing::debug!(model = %self.model, messages = messages.len(), "requesting completion");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;
        first_completion(&body)
    }
}
