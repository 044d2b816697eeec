//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task topic is empty after trimming.
    #[error("task topic must not be empty")]
    EmptyTopic,

    /// A text field exceeds its persisted width.
    #[error("{field} exceeds {max} characters (got {actual})")]
    FieldTooLong {
        /// Field name as exposed to callers.
        field: &'static str,
        /// Maximum accepted length in characters.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// The due date is not an ISO-8601 instant.
    #[error("invalid due date '{0}', expected an ISO-8601 timestamp")]
    InvalidDueDate(String),

    /// The priority is not one of `low`, `medium`, or `high`.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),
}

/// Error returned while parsing task priorities from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
