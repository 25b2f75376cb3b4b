//! Join-table port for project team membership.

use super::ProjectRepositoryResult;
use crate::project::domain::ProjectId;
use crate::user::domain::UserId;
use async_trait::async_trait;

/// Project-to-user membership contract.
#[async_trait]
pub trait ProjectTeamRepository: Send + Sync {
    /// Adds `user_id` to the team of `project_id`.
    ///
    /// Returns `false` when the user was already a member.
    async fn add_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> ProjectRepositoryResult<bool>;

    /// Returns the team of a project, ordered by user identifier.
    async fn members_of(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<UserId>>;

    /// Returns the projects a user belongs to, ordered by project identifier.
    async fn projects_of(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<ProjectId>>;
}
