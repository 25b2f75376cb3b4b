//! In-memory project repository with team membership.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{NewProject, PersistedProjectData, Project, ProjectId},
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, ProjectTeamRepository,
    },
};
use crate::user::domain::UserId;

/// Thread-safe in-memory project repository.
///
/// Implements both [`ProjectRepository`] and [`ProjectTeamRepository`] over
/// one shared state so that deleting a project drops its team rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: BTreeMap<ProjectId, Project>,
    team: BTreeSet<(ProjectId, UserId)>,
    last_id: i64,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = ProjectId::new(state.last_id + 1).map_err(ProjectRepositoryError::persistence)?;
        state.last_id = id.value();
        let stored = Project::from_persisted(PersistedProjectData {
            id,
            fields: project.clone(),
        });
        state.projects.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .projects
            .get_mut(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        *slot = project.clone();
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.projects.remove(&id).is_none() {
            return Err(ProjectRepositoryError::NotFound(id));
        }
        state.team.retain(|(project_id, _)| *project_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ProjectId]) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .projects
            .values()
            .filter(|project| ids.contains(&project.id()))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.values().cloned().collect())
    }
}

#[async_trait]
impl ProjectTeamRepository for InMemoryProjectRepository {
    async fn add_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> ProjectRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.projects.contains_key(&project_id) {
            return Err(ProjectRepositoryError::NotFound(project_id));
        }
        Ok(state.team.insert((project_id, user_id)))
    }

    async fn members_of(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<UserId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .team
            .iter()
            .filter(|(project, _)| *project == project_id)
            .map(|(_, user)| *user)
            .collect())
    }

    async fn projects_of(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<ProjectId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .team
            .iter()
            .filter(|(_, user)| *user == user_id)
            .map(|(project, _)| *project)
            .collect())
    }
}
