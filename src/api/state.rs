//! Shared application state handed to every handler.

use mockable::DefaultClock;
use std::sync::Arc;

use crate::persistence::PgPool;
use crate::project::{
    adapters::{memory::InMemoryProjectRepository, postgres::PostgresProjectRepository},
    ports::{ProjectRepository, ProjectTeamRepository},
    services::ProjectService,
};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::{TaskAssignmentRepository, TaskRepository},
    services::TaskService,
};
use crate::test_case::{
    adapters::{memory::InMemoryTestCaseRepository, postgres::PostgresTestCaseRepository},
    ports::{GherkinGenerator, TestCaseRepository},
    services::TestCaseGenerationService,
};
use crate::user::{
    adapters::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    ports::UserRepository,
    services::UserDirectoryService,
};

/// Task service over type-erased ports.
pub type TaskApiService = TaskService<
    dyn TaskRepository,
    dyn TaskAssignmentRepository,
    dyn ProjectRepository,
    dyn UserRepository,
    dyn TestCaseRepository,
    DefaultClock,
>;

/// Project service over type-erased ports.
pub type ProjectApiService = ProjectService<
    dyn ProjectRepository,
    dyn ProjectTeamRepository,
    dyn UserRepository,
    dyn TaskRepository,
    dyn TestCaseRepository,
>;

/// User directory over a type-erased port.
pub type UserApiService = UserDirectoryService<dyn UserRepository>;

/// Generation relay over type-erased ports.
pub type TestCaseApiService = TestCaseGenerationService<
    dyn TaskRepository,
    dyn TestCaseRepository,
    dyn GherkinGenerator,
    DefaultClock,
>;

/// One handle per storage port.
#[derive(Clone)]
pub struct Repositories {
    /// User records.
    pub users: Arc<dyn UserRepository>,
    /// Project records.
    pub projects: Arc<dyn ProjectRepository>,
    /// Project team join table.
    pub teams: Arc<dyn ProjectTeamRepository>,
    /// Task records.
    pub tasks: Arc<dyn TaskRepository>,
    /// Task assignee join table.
    pub assignments: Arc<dyn TaskAssignmentRepository>,
    /// Generated test cases.
    pub test_cases: Arc<dyn TestCaseRepository>,
}

impl Repositories {
    /// Builds process-local repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            projects: projects.clone(),
            teams: projects,
            tasks: tasks.clone(),
            assignments: tasks,
            test_cases: Arc::new(InMemoryTestCaseRepository::new()),
        }
    }

    /// Builds `PostgreSQL` repositories sharing `pool`.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        let projects = Arc::new(PostgresProjectRepository::new(pool.clone()));
        let tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            projects: projects.clone(),
            teams: projects,
            tasks: tasks.clone(),
            assignments: tasks,
            test_cases: Arc::new(PostgresTestCaseRepository::new(pool.clone())),
        }
    }
}

/// Services shared by all handlers through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Task tracking.
    pub tasks: TaskApiService,
    /// Project directory.
    pub projects: ProjectApiService,
    /// User directory.
    pub users: UserApiService,
    /// Generation relay.
    pub test_cases: TestCaseApiService,
}

impl AppState {
    /// Wires the services over `repositories` and `generator`.
    #[must_use]
    pub fn new(repositories: Repositories, generator: Arc<dyn GherkinGenerator>) -> Self {
        let Repositories {
            users,
            projects,
            teams,
            tasks,
            assignments,
            test_cases,
        } = repositories;
        let clock = Arc::new(DefaultClock);
        Self {
            tasks: TaskService::new(
                Arc::clone(&tasks),
                assignments,
                Arc::clone(&projects),
                Arc::clone(&users),
                Arc::clone(&test_cases),
                Arc::clone(&clock),
            ),
            projects: ProjectService::new(
                projects,
                teams,
                Arc::clone(&users),
                Arc::clone(&tasks),
                Arc::clone(&test_cases),
            ),
            users: UserDirectoryService::new(users),
            test_cases: TestCaseGenerationService::new(tasks, test_cases, generator, clock),
        }
    }
}
