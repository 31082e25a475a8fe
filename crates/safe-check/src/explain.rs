//! Natural-language gloss of an already computed risk level.
//!
//! The generator only ever sees the outcome of the aggregator and returns
//! prose. Nothing it produces is fed back into the risk computation, and
//! every failure degrades to fixed fallback text.

use std::future::Future;
use std::time::Duration;

use safe_config::LlmConfig;
use safe_core::RiskLevel;
use safe_llm::{ChatMessage, LlmClient, LlmError};

pub const NO_CREDENTIALS_FALLBACK: &str = "Unable to generate explanation at this time.";
pub const SERVICE_FAILURE_FALLBACK: &str =
    "This combination may pose risks. Please review the harm-reduction advice below.";

pub const SYSTEM_PROMPT: &str = "You are a harm-reduction assistant.
You provide non-judgemental, evidence-informed explanations of drug interaction risks.
You do not calculate risk.
You do not invent pharmacology.
You do not shame or moralise.
You do not give medical diagnoses.
You prioritise safety, clarity, and calm language.
If the user may have already taken substances, focus on monitoring and harm reduction.
Encourage medical help only when symptoms indicate serious danger, and frame it as support.
Keep responses to 2-3 sentences maximum.";

/// What the explainer is told about a check.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationRequest<'a> {
    pub risk_level: RiskLevel,
    pub mechanism: &'a str,
    pub substances: &'a [String],
    pub already_taken: bool,
}

impl ExplanationRequest<'_> {
    /// User prompt sent alongside [`SYSTEM_PROMPT`].
    #[must_use]
    pub fn user_prompt(&self) -> String {
        let context = if self.already_taken {
            "already taken"
        } else {
            "planning to take"
        };
        format!(
            "Risk level: {}\nMechanism: {}\nSubstances: {}\nContext: User has {context} these substances.\n\nProvide a brief, calm explanation of this interaction risk in 2-3 sentences.",
            self.risk_level,
            self.mechanism,
            self.substances.join(" and "),
        )
    }
}

/// Produces explanation text. Infallible by contract.
pub trait Explainer: Send + Sync {
    fn explain(&self, request: &ExplanationRequest<'_>) -> impl Future<Output = String> + Send;
}

/// [`Explainer`] backed by the chat-completion service.
#[derive(Debug, Clone)]
pub struct ExplanationGenerator {
    client: Option<LlmClient>,
    timeout: Duration,
}

impl ExplanationGenerator {
    /// Build from configuration. Missing credentials are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] only if the HTTP client cannot be constructed.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = match LlmClient::new(config) {
            Ok(client) => Some(client),
            Err(LlmError::MissingApiKey) => {
                tracing::info!("no text-generation key configured; explanations use fallback text");
                None
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            client,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// A generator that always answers with the no-credentials fallback.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            client: None,
            timeout: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Model asked for explanations, if a client is configured.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.client.as_ref().map(LlmClient::model)
    }

    /// Explanation for `request`, or one of the fallback strings.
    pub async fn generate(&self, request: &ExplanationRequest<'_>) -> String {
        let Some(client) = &self.client else {
            return NO_CREDENTIALS_FALLBACK.to_string();
        };

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(request.user_prompt()),
        ];
        match tokio::time::timeout(self.timeout, client.complete(&messages)).await {
            Ok(Ok(text)) => text,
            Ok(Err(error)) => {
                tracing::warn!(%error, timeout = error.is_timeout(), "explanation request failed");
                SERVICE_FAILURE_FALLBACK.to_string()
            }
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "explanation request timed out");
                SERVICE_FAILURE_FALLBACK.to_string()
            }
        }
    }
}

impl Explainer for ExplanationGenerator {
    async fn explain(&self, request: &ExplanationRequest<'_>) -> String {
        self.generate(request).await
    }
}
