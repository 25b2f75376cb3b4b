//! Join-table port for task assignees.

use super::TaskRepositoryResult;
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use async_trait::async_trait;

/// Task-to-user assignment contract.
#[async_trait]
pub trait TaskAssignmentRepository: Send + Sync {
    /// Assigns `user_id` to `task_id`.
    ///
    /// Returns `false` when the user was already assigned.
    async fn assign(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<bool>;

    /// Returns the assignees of a task, ordered by user identifier.
    async fn assignees_of(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<UserId>>;

    /// Returns the tasks assigned to a user, ordered by task identifier.
    async fn tasks_of(&self, user_id: UserId) -> TaskRepositoryResult<Vec<TaskId>>;
}
