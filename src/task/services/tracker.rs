//! Service layer for task CRUD, status changes, and assignment.

use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskLabels, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{TaskAssignmentRepository, TaskRepository, TaskRepositoryError},
};
use crate::test_case::ports::{TestCaseRepository, TestCaseRepositoryError};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: String,
    status: Option<String>,
    priority: Option<String>,
    labels: Vec<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: description.into(),
            status: None,
            priority: None,
            labels: Vec::new(),
            due_date: None,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for editing a task. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    project_id: Option<ProjectId>,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    labels: Option<Vec<String>>,
    due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the task to another project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the replacement labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The owning project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// Project lookup failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// Removing the task's test cases failed.
    #[error(transparent)]
    TestCases(#[from] TestCaseRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// The user is already assigned to the task.
    #[error("user {user_id} is already assigned to task {task_id}")]
    AlreadyAssigned {
        /// Task identifier.
        task_id: TaskId,
        /// User identifier.
        user_id: UserId,
    },
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD and assignment service.
pub struct TaskService<R, A, P, U, T, C>
where
    R: TaskRepository + ?Sized,
    A: TaskAssignmentRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    U: UserRepository + ?Sized,
    T: TestCaseRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    assignments: Arc<A>,
    projects: Arc<P>,
    users: Arc<U>,
    test_cases: Arc<T>,
    clock: Arc<C>,
}

impl<R, A, P, U, T, C> Clone for TaskService<R, A, P, U, T, C>
where
    R: TaskRepository + ?Sized,
    A: TaskAssignmentRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    U: UserRepository + ?Sized,
    T: TestCaseRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            assignments: Arc::clone(&self.assignments),
            projects: Arc::clone(&self.projects),
            users: Arc::clone(&self.users),
            test_cases: Arc::clone(&self.test_cases),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, A, P, U, T, C> TaskService<R, A, P, U, T, C>
where
    R: TaskRepository + ?Sized,
    A: TaskAssignmentRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    U: UserRepository + ?Sized,
    T: TestCaseRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(
        tasks: Arc<R>,
        assignments: Arc<A>,
        projects: Arc<P>,
        users: Arc<U>,
        test_cases: Arc<T>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            assignments,
            projects,
            users,
            test_cases,
            clock,
        }
    }

    /// Creates a task under an existing project.
    ///
    /// Status defaults to `backlog` and priority to `medium`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project is
    /// missing, [`TaskServiceError::Domain`] for invalid fields, and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            project_id,
            title,
            description,
            status,
            priority,
            labels,
            due_date,
        } = request;

        let mut new_task = NewTask::new(
            project_id,
            TaskTitle::new(title)?,
            TaskDescription::new(description)?,
            &*self.clock,
        );
        if let Some(raw) = status {
            new_task.status = TaskStatus::try_from(raw.as_str()).map_err(TaskDomainError::from)?;
        }
        if let Some(raw) = priority {
            new_task.priority = TaskPriority::try_from(raw.as_str()).map_err(TaskDomainError::from)?;
        }
        new_task.labels = TaskLabels::new(labels);
        new_task.due_date = due_date;

        self.require_project(project_id).await?;
        Ok(self.tasks.store(&new_task).await?)
    }

    /// Returns a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Returns all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list_all().await?)
    }

    /// Returns the tasks of a project. An existing project with no tasks
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project is
    /// missing.
    pub async fn list_by_project(&self, project_id: ProjectId) -> TaskServiceResult<Vec<Task>> {
        self.require_project(project_id).await?;
        Ok(self.tasks.list_by_project(project_id).await?)
    }

    /// Applies a patch to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the task or target project is
    /// missing, a field is invalid, or persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        if let Some(project_id) = request.project_id {
            self.require_project(project_id).await?;
            task.move_to(project_id);
        }
        if let Some(title) = request.title {
            task.retitle(TaskTitle::new(title)?);
        }
        if let Some(description) = request.description {
            task.describe(TaskDescription::new(description)?);
        }
        if let Some(status) = request.status {
            task.set_status(TaskStatus::try_from(status.as_str()).map_err(TaskDomainError::from)?);
        }
        if let Some(priority) = request.priority {
            task.set_priority(
                TaskPriority::try_from(priority.as_str()).map_err(TaskDomainError::from)?,
            );
        }
        if let Some(labels) = request.labels {
            task.relabel(TaskLabels::new(labels));
        }
        if let Some(due_date) = request.due_date {
            task.set_due_date(Some(due_date));
        }

        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to another board column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an unknown status and a
    /// wrapped `NotFound` when the task is missing.
    pub async fn update_status(&self, id: TaskId, raw_status: &str) -> TaskServiceResult<Task> {
        let status = TaskStatus::try_from(raw_status).map_err(TaskDomainError::from)?;
        let mut task = self.get(id).await?;
        task.set_status(status);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task along with its assignments and test cases.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist and [`TaskServiceError::TestCases`] when its test cases
    /// cannot be removed.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.tasks.delete(id).await?;
        self.test_cases.delete_for_task(id).await?;
        Ok(())
    }

    /// Assigns a user to a task.
    ///
    /// # Errors
    ///
    /// Returns a wrapped `NotFound` when either side is missing and
    /// [`TaskServiceError::AlreadyAssigned`] for a repeated assignment.
    pub async fn assign(&self, task_id: TaskId, user_id: UserId) -> TaskServiceResult<()> {
        self.get(task_id).await?;
        self.require_user(user_id).await?;
        if !self.assignments.assign(task_id, user_id).await? {
            return Err(TaskServiceError::AlreadyAssigned { task_id, user_id });
        }
        Ok(())
    }

    /// Returns the users assigned to a task.
    ///
    /// # Errors
    ///
    /// Returns a wrapped `NotFound` when the task is missing.
    pub async fn assignees_of(&self, task_id: TaskId) -> TaskServiceResult<Vec<User>> {
        self.get(task_id).await?;
        let user_ids = self.assignments.assignees_of(task_id).await?;
        Ok(self.users.find_by_ids(&user_ids).await?)
    }

    /// Returns the tasks assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns a wrapped `NotFound` when the user is missing.
    pub async fn tasks_of(&self, user_id: UserId) -> TaskServiceResult<Vec<Task>> {
        self.require_user(user_id).await?;
        let task_ids = self.assignments.tasks_of(user_id).await?;
        Ok(self.tasks.find_by_ids(&task_ids).await?)
    }

    async fn require_project(&self, project_id: ProjectId) -> TaskServiceResult<()> {
        match self.projects.find_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(TaskServiceError::ProjectNotFound(project_id)),
        }
    }

    async fn require_user(&self, user_id: UserId) -> TaskServiceResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserRepositoryError::NotFound(user_id).into())
    }
}
