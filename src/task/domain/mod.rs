//! Domain model for owner-scoped task management.
//!
//! Tasks are owned by exactly one identity. The domain validates
//! caller-supplied fields, models partial updates, and derives the aggregate
//! views (completion statistics and category groups) while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod priority;
mod summary;
mod task;

pub use error::{ParseTaskPriorityError, TaskDomainError};
pub use fields::{
    MAX_CATEGORY_CHARS, MAX_TITLE_CHARS, MAX_TOPIC_CHARS, TaskCategory, TaskTitle, TaskTopic,
    parse_due_date,
};
pub use ids::{OwnerId, TaskId};
pub use priority::TaskPriority;
pub use summary::{CategoryGroups, TaskStats, UNCATEGORIZED_LABEL, completion_rate};
pub use task::{PersistedTaskData, Task, TaskChanges, TaskDraft};
