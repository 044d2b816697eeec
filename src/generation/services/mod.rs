//! Application services for task suggestion.

mod generation;

pub use generation::{GenerationError, GenerationResult, TaskGenerationService};
