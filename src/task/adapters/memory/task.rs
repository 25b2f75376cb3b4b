//! In-memory task repository with assignees.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId},
    ports::{TaskAssignmentRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
///
/// Implements both [`TaskRepository`] and [`TaskAssignmentRepository`] over
/// one shared state so that deleting a task drops its assignment rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    assignments: BTreeSet<(TaskId, UserId)>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = TaskId::new(state.last_id + 1).map_err(TaskRepositoryError::persistence)?;
        state.last_id = id.value();
        let stored = Task::from_persisted(PersistedTaskData {
            id,
            fields: task.clone(),
        });
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.assignments.retain(|(task_id, _)| *task_id != id);
        Ok(())
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<TaskId>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed: Vec<TaskId> = state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .map(Task::id)
            .collect();
        state.tasks.retain(|_, task| task.project_id() != project_id);
        state
            .assignments
            .retain(|(task_id, _)| !removed.contains(task_id));
        Ok(removed)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[TaskId]) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| ids.contains(&task.id()))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskAssignmentRepository for InMemoryTaskRepository {
    async fn assign(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.tasks.contains_key(&task_id) {
            return Err(TaskRepositoryError::NotFound(task_id));
        }
        Ok(state.assignments.insert((task_id, user_id)))
    }

    async fn assignees_of(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<UserId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .assignments
            .iter()
            .filter(|(task, _)| *task == task_id)
            .map(|(_, user)| *user)
            .collect())
    }

    async fn tasks_of(&self, user_id: UserId) -> TaskRepositoryResult<Vec<TaskId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .assignments
            .iter()
            .filter(|(_, user)| *user == user_id)
            .map(|(task, _)| *task)
            .collect())
    }
}
