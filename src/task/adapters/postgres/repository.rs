//! `PostgreSQL` repository implementation for tasks and their assignees.

use super::{
    models::{NewTaskRow, TaskAssignmentRow, TaskChangeset, TaskRow},
    schema::{task_assignments, tasks},
};
use crate::persistence::{PgPool, run_blocking_with};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Task, TaskDescription, TaskId, TaskLabels, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{TaskAssignmentRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking_with(
            &self.pool,
            f,
            TaskRepositoryError::persistence,
            TaskRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let row = NewTaskRow {
            project_id: task.project_id.value(),
            title: task.title.as_str().to_owned(),
            description: task.description.as_str().to_owned(),
            status: task.status.as_str().to_owned(),
            priority: task.priority.as_str().to_owned(),
            labels: task.labels.as_slice().to_vec(),
            due_date: task.due_date,
            created_at: task.created_at,
        };
        self.run_blocking(move |connection| {
            let stored = diesel::insert_into(tasks::table)
                .values(&row)
                .returning(TaskRow::as_returning())
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(stored)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = TaskChangeset {
            project_id: task.project_id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            labels: task.labels().as_slice().to_vec(),
            due_date: task.due_date(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<TaskId>> {
        self.run_blocking(move |connection| {
            let mut removed = diesel::delete(
                tasks::table.filter(tasks::project_id.eq(project_id.value())),
            )
            .returning(tasks::id)
            .get_results::<i64>(connection)
            .map_err(TaskRepositoryError::persistence)?;
            removed.sort_unstable();
            removed
                .into_iter()
                .map(|id| TaskId::new(id).map_err(TaskRepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_ids(&self, ids: &[TaskId]) -> TaskRepositoryResult<Vec<Task>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::id.eq_any(raw_ids))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

#[async_trait]
impl TaskAssignmentRepository for PostgresTaskRepository {
    async fn assign(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<bool> {
        let row = TaskAssignmentRow {
            task_id: task_id.value(),
            user_id: user_id.value(),
        };
        self.run_blocking(move |connection| {
            let inserted = diesel::insert_into(task_assignments::table)
                .values(&row)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(inserted == 1)
        })
        .await
    }

    async fn assignees_of(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<UserId>> {
        self.run_blocking(move |connection| {
            let ids = task_assignments::table
                .filter(task_assignments::task_id.eq(task_id.value()))
                .order(task_assignments::user_id.asc())
                .select(task_assignments::user_id)
                .load::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            ids.into_iter()
                .map(|id| UserId::new(id).map_err(TaskRepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn tasks_of(&self, user_id: UserId) -> TaskRepositoryResult<Vec<TaskId>> {
        self.run_blocking(move |connection| {
            let ids = task_assignments::table
                .filter(task_assignments::user_id.eq(user_id.value()))
                .order(task_assignments::task_id.asc())
                .select(task_assignments::task_id)
                .load::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            ids.into_iter()
                .map(|id| TaskId::new(id).map_err(TaskRepositoryError::persistence))
                .collect()
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        title,
        description,
        status,
        priority,
        labels,
        due_date,
        created_at,
    } = row;

    let fields = NewTask {
        project_id: ProjectId::new(project_id).map_err(TaskRepositoryError::persistence)?,
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        description: TaskDescription::new(description)
            .map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::try_from(status.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        priority: TaskPriority::try_from(priority.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        labels: TaskLabels::new(labels),
        due_date,
        created_at,
    };
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        fields,
    }))
}
