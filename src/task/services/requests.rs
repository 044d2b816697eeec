//! Caller-supplied request payloads for task management.
//!
//! Requests carry raw strings exactly as received and are validated by the
//! service. They deliberately have no owner field: ownership always comes
//! from the verified caller identity.

use crate::task::domain::{
    TaskCategory, TaskChanges, TaskDomainError, TaskDraft, TaskPriority, TaskTitle, TaskTopic,
    parse_due_date,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    topic: String,
    category: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            topic: topic.into(),
            category: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the priority (`low`, `medium`, or `high`).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date as an ISO-8601 string.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub(crate) fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        let mut draft = TaskDraft::new(TaskTitle::new(self.title)?, TaskTopic::new(self.topic)?);
        draft.description = self.description.and_then(non_blank);
        draft.category = self.category.map(TaskCategory::parse).transpose()?.flatten();
        if let Some(priority) = self.priority {
            draft.priority = TaskPriority::try_from(priority.as_str())?;
        }
        draft.due_date = parse_optional_due_date(self.due_date.as_deref())?;
        Ok(draft)
    }
}

/// Request payload for a partial task update.
///
/// Absent fields are left unchanged. A blank `description` or `category`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    topic: Option<String>,
    completed: Option<bool>,
    category: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update that only refreshes the update timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the topic.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replaces or clears the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces the due date with an ISO-8601 string.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub(crate) fn into_changes(
        self,
        updated_at: DateTime<Utc>,
    ) -> Result<TaskChanges, TaskDomainError> {
        let mut changes = TaskChanges::touching(updated_at);
        changes.title = self.title.map(TaskTitle::new).transpose()?;
        changes.description = self.description.map(non_blank);
        changes.topic = self.topic.map(TaskTopic::new).transpose()?;
        changes.completed = self.completed;
        changes.category = self.category.map(TaskCategory::parse).transpose()?;
        changes.priority = self
            .priority
            .map(|priority| TaskPriority::try_from(priority.as_str()))
            .transpose()?;
        changes.due_date = parse_optional_due_date(self.due_date.as_deref())?;
        Ok(changes)
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn parse_optional_due_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, TaskDomainError> {
    value.map(parse_due_date).transpose()
}
