//! Shared world state for test case generation BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use sprinthub::api::{ProjectApiService, Repositories, TaskApiService, TestCaseApiService};
use sprinthub::project::services::ProjectService;
use sprinthub::task::{domain::Task, services::TaskService};
use sprinthub::test_case::{
    adapters::memory::StaticGherkinGenerator,
    domain::TestCase,
    ports::GherkinGenerator,
    services::{TestCaseGenerationService, TestCaseServiceResult},
};

/// Scenario world for generation behaviour tests.
pub struct GenerationWorld {
    pub repositories: Repositories,
    pub projects: ProjectApiService,
    pub tasks: TaskApiService,
    pub generator: Option<StaticGherkinGenerator>,
    pub task: Option<Task>,
    pub results: Vec<TestCaseServiceResult<TestCase>>,
}

impl GenerationWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let repositories = Repositories::in_memory();
        let projects = ProjectService::new(
            Arc::clone(&repositories.projects),
            Arc::clone(&repositories.teams),
            Arc::clone(&repositories.users),
            Arc::clone(&repositories.tasks),
            Arc::clone(&repositories.test_cases),
        );
        let tasks = TaskService::new(
            Arc::clone(&repositories.tasks),
            Arc::clone(&repositories.assignments),
            Arc::clone(&repositories.projects),
            Arc::clone(&repositories.users),
            Arc::clone(&repositories.test_cases),
            Arc::new(DefaultClock),
        );

        Self {
            repositories,
            projects,
            tasks,
            generator: None,
            task: None,
            results: Vec::new(),
        }
    }

    /// Builds a relay over the configured generator.
    pub fn relay(&self) -> Result<TestCaseApiService, eyre::Report> {
        let generator: Arc<dyn GherkinGenerator> = Arc::new(
            self.generator
                .clone()
                .ok_or_else(|| eyre::eyre!("missing generator in scenario world"))?,
        );
        Ok(TestCaseGenerationService::new(
            Arc::clone(&self.repositories.tasks),
            Arc::clone(&self.repositories.test_cases),
            generator,
            Arc::new(DefaultClock),
        ))
    }

    /// Returns the generator configured by a given step.
    pub fn generator(&self) -> Result<&StaticGherkinGenerator, eyre::Report> {
        self.generator
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing generator in scenario world"))
    }

    /// Returns the task created by a given step.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for GenerationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GenerationWorld {
    GenerationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
