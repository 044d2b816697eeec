//! Aggregate read models derived from an owner's task list.

use super::{Task, TaskCategory};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Group label for tasks without a category.
///
/// The label is a read-side convention only and is never persisted.
pub const UNCATEGORIZED_LABEL: &str = "uncategorized";

/// Completion statistics for one owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks not yet completed.
    pub pending: usize,
    /// Whole-number completion percentage in `0..=100`.
    pub completion_rate: u8,
}

impl TaskStats {
    /// Computes statistics over a task list.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total,
            completed,
            pending: total.saturating_sub(completed),
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// Returns `round(100 * completed / total)` with halves rounded away from
/// zero, or `0` when `total` is zero.
///
/// ```
/// use taskwise::task::domain::completion_rate;
///
/// assert_eq!(completion_rate(1, 8), 13);
/// assert_eq!(completion_rate(2, 3), 67);
/// assert_eq!(completion_rate(0, 0), 0);
/// ```
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    let doubled_percent = completed.min(total).saturating_mul(200).saturating_add(total);
    let rate = doubled_percent
        .checked_div(total.saturating_mul(2))
        .unwrap_or(0);
    u8::try_from(rate.min(100)).unwrap_or(100)
}

/// Tasks grouped by category label in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: Vec<(String, Vec<Task>)>,
}

impl CategoryGroups {
    /// Partitions `tasks` by category, preserving input order within and
    /// across groups. Tasks without a category land under
    /// [`UNCATEGORIZED_LABEL`].
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut groups: Vec<(String, Vec<Task>)> = Vec::new();
        for task in tasks {
            let label = task
                .category()
                .map_or(UNCATEGORIZED_LABEL, TaskCategory::as_str)
                .to_owned();
            match groups.iter_mut().find(|(existing, _)| *existing == label) {
                Some((_, members)) => members.push(task),
                None => groups.push((label, vec![task])),
            }
        }
        Self { groups }
    }

    /// Returns the tasks under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[Task]> {
        self.groups
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, members)| members.as_slice())
    }

    /// Iterates over group labels in first-encounter order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    /// Iterates over `(label, tasks)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Task])> {
        self.groups
            .iter()
            .map(|(label, members)| (label.as_str(), members.as_slice()))
    }

    /// Returns the number of groups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when there are no groups.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consumes the grouping and returns the ordered pairs.
    #[must_use]
    pub fn into_inner(self) -> Vec<(String, Vec<Task>)> {
        self.groups
    }
}

impl Serialize for CategoryGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, members) in &self.groups {
            map.serialize_entry(label, members)?;
        }
        map.end()
    }
}
