//! Text generator port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for text generator calls.
pub type TextGeneratorResult<T> = Result<T, TextGeneratorError>;

/// External, non-deterministic text generation capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` and returns the raw reply text.
    ///
    /// Implementations make a single attempt; retries are not part of the
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`TextGeneratorError`] on transport, quota, status, or
    /// response-shape failures.
    async fn generate(&self, prompt: &str) -> TextGeneratorResult<String>;
}

/// Errors returned by text generator adapters.
#[derive(Debug, Clone, Error)]
pub enum TextGeneratorError {
    /// No API credential is configured.
    #[error("text generator API key is not configured")]
    MissingApiKey,

    /// The request could not be sent or the reply could not be read.
    #[error("text generator transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The endpoint rejected the request because of rate or quota limits.
    #[error("text generator quota exhausted: {0}")]
    Quota(String),

    /// The endpoint answered with a non-success status.
    #[error("text generator returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The reply did not have the expected shape.
    #[error("malformed text generator response: {0}")]
    MalformedResponse(String),
}

impl TextGeneratorError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
