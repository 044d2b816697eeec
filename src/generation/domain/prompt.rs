//! Prompt rendering for the text generator.

use super::MAX_SUGGESTIONS;
use minijinja::{Environment, context};
use thiserror::Error;

const PROMPT_TEMPLATE: &str = "\
Generate a list of {{ count }} concise, actionable tasks to learn about {{ topic }}.
Each task should be:
- Specific and actionable
- Suitable for a beginner to intermediate learner
- Between 5-15 words long
- Focused on practical learning

Return only the tasks, one per line, without numbering or formatting.

Example format:
Complete an online course on basics
Practice with hands-on exercises
Build a simple project
Read documentation and tutorials
Join a community or forum";

/// Error raised when the prompt template cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render generation prompt: {0}")]
pub struct PromptRenderError(pub String);

/// Renders the generation prompt for `topic`.
///
/// # Errors
///
/// Returns [`PromptRenderError`] when template rendering fails.
pub fn render_prompt(topic: &str) -> Result<String, PromptRenderError> {
    let environment = Environment::new();
    environment
        .render_str(
            PROMPT_TEMPLATE,
            context! { topic => topic, count => MAX_SUGGESTIONS },
        )
        .map_err(|error| PromptRenderError(error.to_string()))
}
