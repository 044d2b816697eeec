//! Task aggregate root and its write-side value objects.

use super::{OwnerId, TaskCategory, TaskId, TaskPriority, TaskTitle, TaskTopic};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task belongs to exactly one owner for its whole life. `id`, `owner_id`
/// and `created_at` are fixed at construction; every other field changes only
/// through [`Task::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    owner_id: OwnerId,
    title: TaskTitle,
    description: Option<String>,
    topic: TaskTopic,
    completed: bool,
    category: Option<TaskCategory>,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated caller-supplied fields for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: TaskTitle,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Subject the task relates to.
    pub topic: TaskTopic,
    /// Optional grouping category.
    pub category: Option<TaskCategory>,
    /// Priority tag.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft with the required fields and defaults elsewhere.
    #[must_use]
    pub fn new(title: TaskTitle, topic: TaskTopic) -> Self {
        Self {
            title,
            description: None,
            topic,
            category: None,
            priority: TaskPriority::default(),
            due_date: None,
        }
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted topic.
    pub topic: TaskTopic,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted category, if any.
    pub category: Option<TaskCategory>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated partial update for an existing task.
///
/// `None` leaves a field untouched. For the nullable fields
/// (`description`, `category`) `Some(None)` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement or cleared description.
    pub description: Option<Option<String>>,
    /// Replacement topic.
    pub topic: Option<TaskTopic>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement or cleared category.
    pub category: Option<Option<TaskCategory>>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Timestamp written to `updated_at`.
    pub updated_at: DateTime<Utc>,
}

impl TaskChanges {
    /// Creates a change set that only refreshes `updated_at`.
    #[must_use]
    pub const fn touching(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            description: None,
            topic: None,
            completed: None,
            category: None,
            priority: None,
            due_date: None,
            updated_at,
        }
    }

    /// Returns `true` when no field other than `updated_at` changes.
    #[must_use]
    pub const fn is_touch_only(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.topic.is_none()
            && self.completed.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

impl Task {
    /// Creates a new, incomplete task owned by `owner_id`.
    #[must_use]
    pub fn new(owner_id: OwnerId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id,
            title: draft.title,
            description: draft.description,
            topic: draft.topic,
            completed: false,
            category: draft.category,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            topic: data.topic,
            completed: data.completed,
            category: data.category,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning identity.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns `true` when `owner_id` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, owner_id: OwnerId) -> bool {
        self.owner_id == owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the topic.
    #[must_use]
    pub const fn topic(&self) -> &TaskTopic {
        &self.topic
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the category, if any.
    #[must_use]
    pub const fn category(&self) -> Option<&TaskCategory> {
        self.category.as_ref()
    }

    /// Returns the priority tag.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update in place.
    ///
    /// `updated_at` never moves before `created_at`, even when the supplied
    /// timestamp does.
    pub fn apply(&mut self, changes: &TaskChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(topic) = &changes.topic {
            self.topic = topic.clone();
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(category) = &changes.category {
            self.category.clone_from(category);
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = Some(due_date);
        }
        self.updated_at = changes.updated_at.max(self.created_at);
    }
}
