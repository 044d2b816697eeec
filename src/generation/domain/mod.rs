//! Domain rules for task suggestion.

mod prompt;
mod suggestions;

pub use prompt::{PromptRenderError, render_prompt};
pub use suggestions::{
    GeneratedTaskSuggestions, GenerationOutcome, MAX_SUGGESTIONS, fallback_suggestions,
    parse_suggestions,
};
