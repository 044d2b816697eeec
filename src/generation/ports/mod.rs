//! Port contracts for task suggestion.

pub mod text_generator;

pub use text_generator::{TextGenerator, TextGeneratorError, TextGeneratorResult};

#[cfg(test)]
pub use text_generator::MockTextGenerator;
