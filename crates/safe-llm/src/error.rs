//! Text-generation client error types.

use thiserror::Error;

/// Errors that can occur when calling the chat-completion service.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured.
    #[error("no API key configured for the text-generation service")]
    MissingApiKey,

    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response had no usable completion text.
    #[error("empty completion")]
    EmptyCompletion,
}

impl LlmError {
    /// Whether the request gave up because the timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
