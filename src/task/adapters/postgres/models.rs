//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning identity.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Task topic.
    pub topic: String,
    /// Completion flag.
    pub completed: bool,
    /// Optional category.
    pub category: Option<String>,
    /// Priority tag.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning identity.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Task topic.
    pub topic: String,
    /// Completion flag.
    pub completed: bool,
    /// Optional category.
    pub category: Option<String>,
    /// Priority tag.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update model. `None` fields are left out of the `SET` clause;
/// `Some(None)` on a nullable column writes `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement or cleared description.
    pub description: Option<Option<String>>,
    /// Replacement topic.
    pub topic: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement or cleared category.
    pub category: Option<Option<String>>,
    /// Replacement priority.
    pub priority: Option<String>,
    /// Replacement due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Refreshed update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}
