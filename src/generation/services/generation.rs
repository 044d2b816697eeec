//! Task suggestion with deterministic fallback.

use crate::config::GeneratorConfig;
use crate::generation::{
    domain::{GeneratedTaskSuggestions, PromptRenderError, parse_suggestions, render_prompt},
    ports::{TextGenerator, TextGeneratorError},
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Service-level errors for task suggestion.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The topic is empty after trimming. This is a caller error and is
    /// never replaced by the fallback.
    #[error("topic must not be empty")]
    EmptyTopic,
    /// The prompt could not be rendered.
    #[error(transparent)]
    Prompt(#[from] PromptRenderError),
    /// The text generator failed.
    #[error(transparent)]
    Generator(#[from] TextGeneratorError),
    /// The reply contained no usable task lines.
    #[error("text generator reply contained no usable tasks")]
    EmptyOutput,
    /// The text generator did not answer in time.
    #[error("text generator did not answer within {0:?}")]
    DeadlineExceeded(Duration),
}

/// Result type for task suggestion.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Turns a topic into task titles using an external text generator.
#[derive(Clone)]
pub struct TaskGenerationService<G>
where
    G: TextGenerator,
{
    generator: Arc<G>,
    deadline: Option<Duration>,
}

impl<G> TaskGenerationService<G>
where
    G: TextGenerator,
{
    /// Creates a service with no deadline on generator calls.
    #[must_use]
    pub const fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            deadline: None,
        }
    }

    /// Creates a service using the deadline from `config`.
    #[must_use]
    pub const fn from_config(generator: Arc<G>, config: &GeneratorConfig) -> Self {
        Self {
            generator,
            deadline: config.deadline(),
        }
    }

    /// Per-call deadline applied to the generator, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Replaces the per-call deadline; `None` waits indefinitely.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Asks the generator for up to five task titles for `topic`.
    ///
    /// The generator is called exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyTopic`] before any call when the topic
    /// is blank, and the other [`GenerationError`] variants when the call
    /// fails, times out, or yields no usable lines.
    pub async fn generate(&self, topic: &str) -> GenerationResult<Vec<String>> {
        let normalized = topic.trim();
        if normalized.is_empty() {
            return Err(GenerationError::EmptyTopic);
        }
        let prompt = render_prompt(normalized)?;
        let reply = self.call_generator(&prompt).await?;
        let titles = parse_suggestions(&reply);
        if titles.is_empty() {
            return Err(GenerationError::EmptyOutput);
        }
        Ok(titles)
    }

    /// Like [`Self::generate`], but replaces every generator-side failure
    /// with the fixed fallback list for the topic.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyTopic`] when the topic is blank. No
    /// other error reaches the caller.
    pub async fn generate_with_fallback(
        &self,
        topic: &str,
    ) -> GenerationResult<GeneratedTaskSuggestions> {
        let normalized = topic.trim();
        match self.generate(normalized).await {
            Ok(titles) => Ok(GeneratedTaskSuggestions::generated(
                normalized.to_owned(),
                titles,
            )),
            Err(GenerationError::EmptyTopic) => Err(GenerationError::EmptyTopic),
            Err(error) => {
                tracing::warn!(%error, topic = normalized, "falling back to predefined tasks");
                Ok(GeneratedTaskSuggestions::fallback(normalized))
            }
        }
    }

    async fn call_generator(&self, prompt: &str) -> GenerationResult<String> {
        let call = self.generator.generate(prompt);
        let Some(deadline) = self.deadline else {
            return Ok(call.await?);
        };
        let reply = tokio::time::timeout(deadline, call)
            .await
            .map_err(|_elapsed| GenerationError::DeadlineExceeded(deadline))??;
        Ok(reply)
    }
}
