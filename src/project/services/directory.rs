//! Service layer for project CRUD and team staffing.

use crate::project::{
    domain::{
        NewProject, Project, ProjectDescription, ProjectDomainError, ProjectId, ProjectName,
        ProjectProgress, ProjectSchedule, ProjectStatus,
    },
    ports::{ProjectRepository, ProjectRepositoryError, ProjectTeamRepository},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::test_case::ports::{TestCaseRepository, TestCaseRepositoryError};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
    status: Option<String>,
    progress: i64,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: None,
            progress: 0,
            start_date,
            end_date: None,
        }
    }

    /// Sets the status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the completion percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: i64) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Request payload for editing a project. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    name: Option<String>,
    description: Option<String>,
    status: Option<String>,
    progress: Option<i64>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    user_id_to_add: Option<UserId>,
}

impl UpdateProjectRequest {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the replacement completion percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sets the replacement start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the replacement end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Adds a user to the team as part of the update.
    #[must_use]
    pub const fn with_user_to_add(mut self, user_id: UserId) -> Self {
        self.user_id_to_add = Some(user_id);
        self
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Removing the project's tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Removing the test cases of the project's tasks failed.
    #[error(transparent)]
    TestCases(#[from] TestCaseRepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project CRUD and staffing service.
pub struct ProjectService<P, M, U, T, X>
where
    P: ProjectRepository + ?Sized,
    M: ProjectTeamRepository + ?Sized,
    U: UserRepository + ?Sized,
    T: TaskRepository + ?Sized,
    X: TestCaseRepository + ?Sized,
{
    projects: Arc<P>,
    team: Arc<M>,
    users: Arc<U>,
    tasks: Arc<T>,
    test_cases: Arc<X>,
}

impl<P, M, U, T, X> Clone for ProjectService<P, M, U, T, X>
where
    P: ProjectRepository + ?Sized,
    M: ProjectTeamRepository + ?Sized,
    U: UserRepository + ?Sized,
    T: TaskRepository + ?Sized,
    X: TestCaseRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            team: Arc::clone(&self.team),
            users: Arc::clone(&self.users),
            tasks: Arc::clone(&self.tasks),
            test_cases: Arc::clone(&self.test_cases),
        }
    }
}

impl<P, M, U, T, X> ProjectService<P, M, U, T, X>
where
    P: ProjectRepository + ?Sized,
    M: ProjectTeamRepository + ?Sized,
    U: UserRepository + ?Sized,
    T: TaskRepository + ?Sized,
    X: TestCaseRepository + ?Sized,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(
        projects: Arc<P>,
        team: Arc<M>,
        users: Arc<U>,
        tasks: Arc<T>,
        test_cases: Arc<X>,
    ) -> Self {
        Self {
            projects,
            team,
            users,
            tasks,
            test_cases,
        }
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] for invalid fields and
    /// [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectServiceResult<Project> {
        let CreateProjectRequest {
            name,
            description,
            status,
            progress,
            start_date,
            end_date,
        } = request;

        let new_project = NewProject {
            name: ProjectName::new(name)?,
            description: ProjectDescription::new(description)?,
            status: status.map(ProjectStatus::new).unwrap_or_default(),
            progress: ProjectProgress::new(progress)?,
            schedule: ProjectSchedule::new(start_date, end_date)?,
        };
        Ok(self.projects.store(&new_project).await?)
    }

    /// Returns a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] (wrapped) when the
    /// project does not exist.
    pub async fn get(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectRepositoryError::NotFound(id).into())
    }

    /// Returns all projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when lookup fails.
    pub async fn list(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.projects.list_all().await?)
    }

    /// Applies a patch to a project, optionally adding a team member.
    ///
    /// The member is validated before any field is written so that an
    /// unknown user leaves the project untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when the project or user is missing,
    /// a field is invalid, or persistence fails.
    pub async fn update(
        &self,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.get(id).await?;
        if let Some(user_id) = request.user_id_to_add {
            self.require_user(user_id).await?;
        }

        if let Some(name) = request.name {
            project.rename(ProjectName::new(name)?);
        }
        if let Some(description) = request.description {
            project.describe(ProjectDescription::new(description)?);
        }
        if let Some(status) = request.status {
            project.set_status(ProjectStatus::new(status));
        }
        if let Some(progress) = request.progress {
            project.set_progress(ProjectProgress::new(progress)?);
        }
        if request.start_date.is_some() || request.end_date.is_some() {
            let current = project.schedule();
            let schedule = ProjectSchedule::new(
                request.start_date.unwrap_or_else(|| current.start()),
                request.end_date.or_else(|| current.end()),
            )?;
            project.reschedule(schedule);
        }

        self.projects.update(&project).await?;
        if let Some(user_id) = request.user_id_to_add {
            self.team.add_member(id, user_id).await?;
        }
        Ok(project)
    }

    /// Deletes a project together with its team rows, its tasks, and the
    /// test cases of those tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] (wrapped) when the
    /// project does not exist, and [`ProjectServiceError::Tasks`] or
    /// [`ProjectServiceError::TestCases`] when dependent rows cannot be
    /// removed.
    pub async fn delete(&self, id: ProjectId) -> ProjectServiceResult<()> {
        self.get(id).await?;
        let removed = self.tasks.delete_by_project(id).await?;
        for task_id in removed {
            self.test_cases.delete_for_task(task_id).await?;
        }
        Ok(self.projects.delete(id).await?)
    }

    /// Adds a user to a project's team. Adding an existing member is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns a wrapped `NotFound` when either side of the relation is
    /// missing.
    pub async fn add_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> ProjectServiceResult<()> {
        self.get(project_id).await?;
        self.require_user(user_id).await?;
        self.team.add_member(project_id, user_id).await?;
        Ok(())
    }

    /// Returns the team of a project.
    ///
    /// # Errors
    ///
    /// Returns a wrapped `NotFound` when the project is missing.
    pub async fn members_of(&self, project_id: ProjectId) -> ProjectServiceResult<Vec<User>> {
        self.get(project_id).await?;
        let member_ids = self.team.members_of(project_id).await?;
        Ok(self.users.find_by_ids(&member_ids).await?)
    }

    /// Returns the projects a user belongs to.
    ///
    /// # Errors
    ///
    /// Returns a wrapped `NotFound` when the user is missing.
    pub async fn projects_of(&self, user_id: UserId) -> ProjectServiceResult<Vec<Project>> {
        self.require_user(user_id).await?;
        let project_ids = self.team.projects_of(user_id).await?;
        Ok(self.projects.find_by_ids(&project_ids).await?)
    }

    async fn require_user(&self, user_id: UserId) -> ProjectServiceResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserRepositoryError::NotFound(user_id).into())
    }
}
