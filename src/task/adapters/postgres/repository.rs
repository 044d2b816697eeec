//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::config::DatabaseConfig;
use crate::task::{
    domain::{
        OwnerId, PersistedTaskData, Task, TaskCategory, TaskChanges, TaskId, TaskPriority,
        TaskTitle, TaskTopic,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool from database configuration.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the database section has
/// no URL or the pool cannot open its initial connections.
pub fn build_pool(config: &DatabaseConfig) -> TaskRepositoryResult<TaskPgPool> {
    config
        .ensure_configured()
        .map_err(TaskRepositoryError::persistence)?;
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}

/// `PostgreSQL`-backed task repository.
///
/// Every owner-scoped statement filters on both `id` and `owner_id`. Batch
/// inserts run inside one transaction. Listing orders by `created_at`
/// descending and breaks ties by `id`.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        tracing::debug!(%task_id, owner_id = %task.owner_id(), "inserting task");

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_insert_error(err, task_id))?;
            row_to_task(row)
        })
        .await
    }

    async fn store_batch(&self, batch: &[Task]) -> TaskRepositoryResult<Vec<Task>> {
        let Some(first_id) = batch.first().map(Task::id) else {
            return Ok(Vec::new());
        };
        let new_rows: Vec<NewTaskRow> = batch.iter().map(to_new_row).collect();
        tracing::debug!(count = new_rows.len(), "inserting task batch");

        self.run_blocking(move |connection| {
            let rows = connection
                .transaction::<Vec<TaskRow>, DieselError, _>(|transaction| {
                    diesel::insert_into(tasks::table)
                        .values(&new_rows)
                        .returning(TaskRow::as_returning())
                        .get_results::<TaskRow>(transaction)
                })
                .map_err(|err| map_insert_error(err, first_id))?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner_id.into_inner()))
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::owner_id.eq(owner_id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update_for_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<Option<Task>> {
        let changeset = to_changeset(changes);
        self.run_blocking(move |connection| {
            let row = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::owner_id.eq(owner_id.into_inner())),
            )
            .set(&changeset)
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete_for_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::owner_id.eq(owner_id.into_inner())),
            )
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

fn map_insert_error(err: DieselError, task_id: TaskId) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TaskRepositoryError::DuplicateTask(task_id)
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        topic: task.topic().as_str().to_owned(),
        completed: task.is_completed(),
        category: task.category().map(|category| category.as_str().to_owned()),
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(changes: &TaskChanges) -> TaskChangeset {
    TaskChangeset {
        title: changes.title.as_ref().map(|title| title.as_str().to_owned()),
        description: changes.description.clone(),
        topic: changes.topic.as_ref().map(|topic| topic.as_str().to_owned()),
        completed: changes.completed,
        category: changes.category.as_ref().map(|category| {
            category
                .as_ref()
                .map(|value| value.as_str().to_owned())
        }),
        priority: changes.priority.map(|priority| priority.as_str().to_owned()),
        due_date: changes.due_date.map(Some),
        updated_at: Some(changes.updated_at),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title,
        description,
        topic,
        completed,
        category,
        priority,
        due_date,
        created_at,
        updated_at,
    } = row;

    let persisted_category = category
        .map(TaskCategory::parse)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?
        .flatten();
    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner_id: OwnerId::from_uuid(owner_id),
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        description,
        topic: TaskTopic::new(topic).map_err(TaskRepositoryError::persistence)?,
        completed,
        category: persisted_category,
        priority: TaskPriority::try_from(priority.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        due_date,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
