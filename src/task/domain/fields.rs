//! Validated scalar fields of a task.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title width, matching the `tasks.title` column.
pub const MAX_TITLE_CHARS: usize = 500;
/// Maximum topic width, matching the `tasks.topic` column.
pub const MAX_TOPIC_CHARS: usize = 200;
/// Maximum category width, matching the `tasks.category` column.
pub const MAX_CATEGORY_CHARS: usize = 100;

/// Non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// The text is kept exactly as supplied; surrounding whitespace only
    /// matters for the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for blank input or
    /// [`TaskDomainError::FieldTooLong`] when the title exceeds
    /// [`MAX_TITLE_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        ensure_width("title", &raw, MAX_TITLE_CHARS)?;
        Ok(Self(raw))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty subject a task relates to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTopic(String);

impl TaskTopic {
    /// Creates a validated topic, kept exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTopic`] for blank input or
    /// [`TaskDomainError::FieldTooLong`] when the topic exceeds
    /// [`MAX_TOPIC_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTopic);
        }
        ensure_width("topic", &raw, MAX_TOPIC_CHARS)?;
        Ok(Self(raw))
    }

    /// Returns the topic text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTopic {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form category label used for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCategory(String);

impl TaskCategory {
    /// Parses an optional category.
    ///
    /// Blank input yields `Ok(None)`: an empty category is the same as no
    /// category. Any other text is kept exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::FieldTooLong`] when the category exceeds
    /// [`MAX_CATEGORY_CHARS`].
    pub fn parse(value: impl Into<String>) -> Result<Option<Self>, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        ensure_width("category", &raw, MAX_CATEGORY_CHARS)?;
        Ok(Some(Self(raw)))
    }

    /// Returns the category text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a due date supplied as an ISO-8601 string.
///
/// Accepts RFC 3339 instants (`2024-12-31T23:59:59.000Z`), date-times
/// without an offset, and bare dates. Offset-less values are read as UTC;
/// bare dates resolve to midnight UTC.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when none of the accepted
/// forms match.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    let trimmed = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TaskDomainError::InvalidDueDate(value.to_owned()))
}

fn ensure_width(field: &'static str, value: &str, max: usize) -> Result<(), TaskDomainError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(TaskDomainError::FieldTooLong { field, max, actual });
    }
    Ok(())
}
