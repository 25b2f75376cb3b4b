//! Service orchestration tests for projects and team staffing.

use std::sync::Arc;

use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectId},
    ports::ProjectRepositoryError,
    services::{
        CreateProjectRequest, ProjectService, ProjectServiceError, UpdateProjectRequest,
    },
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskDescription, TaskTitle},
    ports::TaskRepository,
};
use crate::test_case::{
    adapters::memory::InMemoryTestCaseRepository,
    domain::{GherkinScenario, NewTestCase},
    ports::TestCaseRepository,
};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{EmailAddress, NewUser, User, UserId, UserName, UserRole},
    ports::{UserRepository, UserRepositoryError},
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = ProjectService<
    InMemoryProjectRepository,
    InMemoryProjectRepository,
    InMemoryUserRepository,
    InMemoryTaskRepository,
    InMemoryTestCaseRepository,
>;

struct Harness {
    service: TestService,
    users: Arc<InMemoryUserRepository>,
    tasks: Arc<InMemoryTaskRepository>,
    test_cases: Arc<InMemoryTestCaseRepository>,
}

#[fixture]
fn harness() -> Harness {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let test_cases = Arc::new(InMemoryTestCaseRepository::new());
    Harness {
        service: ProjectService::new(
            Arc::clone(&projects),
            projects,
            Arc::clone(&users),
            Arc::clone(&tasks),
            Arc::clone(&test_cases),
        ),
        users,
        tasks,
        test_cases,
    }
}

fn sprint_request() -> CreateProjectRequest {
    let start = Utc
        .with_ymd_and_hms(2025, 3, 18, 9, 0, 0)
        .single()
        .expect("valid date");
    CreateProjectRequest::new("SprintHub", "Task tracking for small teams", start)
}

async fn create_project(harness: &Harness) -> Project {
    harness
        .service
        .create(sprint_request())
        .await
        .expect("project creation should succeed")
}

async fn register_user(harness: &Harness, email: &str) -> User {
    let new_user = NewUser {
        name: UserName::new("Member").expect("valid name"),
        email: EmailAddress::new(email).expect("valid email"),
        role: UserRole::Developer,
    };
    harness
        .users
        .store(&new_user)
        .await
        .expect("user registration should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_defaults_status_and_progress(harness: Harness) {
    let project = create_project(&harness).await;

    assert_eq!(project.id().value(), 1);
    assert_eq!(project.status().as_str(), "active");
    assert_eq!(project.progress().value(), 0);
    assert_eq!(harness.service.get(project.id()).await.expect("lookup"), project);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_fields_and_adds_member(harness: Harness) {
    let project = create_project(&harness).await;
    let user = register_user(&harness, "dev@example.com").await;

    let updated = harness
        .service
        .update(
            project.id(),
            UpdateProjectRequest::new()
                .with_progress(40)
                .with_status("on-hold")
                .with_user_to_add(user.id()),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.progress().value(), 40);
    assert_eq!(updated.status().as_str(), "on-hold");
    assert_eq!(updated.name(), project.name());
    let members = harness
        .service
        .members_of(project.id())
        .await
        .expect("team lookup");
    assert_eq!(members, vec![user]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_unknown_member_leaves_project_untouched(harness: Harness) {
    let project = create_project(&harness).await;
    let ghost = UserId::new(42).expect("valid id");

    let result = harness
        .service
        .update(
            project.id(),
            UpdateProjectRequest::new()
                .with_progress(90)
                .with_user_to_add(ghost),
        )
        .await;

    assert!(matches!(
        result,
        Err(ProjectServiceError::Users(UserRepositoryError::NotFound(_)))
    ));
    let stored = harness.service.get(project.id()).await.expect("lookup");
    assert_eq!(stored.progress().value(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_is_idempotent(harness: Harness) {
    let project = create_project(&harness).await;
    let user = register_user(&harness, "dev@example.com").await;

    for _ in 0..2 {
        harness
            .service
            .add_member(project.id(), user.id())
            .await
            .expect("adding a member should succeed");
    }

    let members = harness
        .service
        .members_of(project.id())
        .await
        .expect("team lookup");
    assert_eq!(members.len(), 1);
    let projects = harness
        .service
        .projects_of(user.id())
        .await
        .expect("membership lookup");
    assert_eq!(projects, vec![project]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_project_and_team(harness: Harness) {
    let project = create_project(&harness).await;
    let user = register_user(&harness, "dev@example.com").await;
    harness
        .service
        .add_member(project.id(), user.id())
        .await
        .expect("add member");

    harness
        .service
        .delete(project.id())
        .await
        .expect("delete should succeed");

    assert!(matches!(
        harness.service.get(project.id()).await,
        Err(ProjectServiceError::Repository(ProjectRepositoryError::NotFound(_)))
    ));
    let projects = harness
        .service
        .projects_of(user.id())
        .await
        .expect("membership lookup");
    assert!(projects.is_empty());
}

async fn seed_task(harness: &Harness, project_id: ProjectId, title: &str) -> Task {
    let new_task = NewTask::new(
        project_id,
        TaskTitle::new(title).expect("valid title"),
        TaskDescription::new("As a user I want to log in").expect("valid description"),
        &DefaultClock,
    );
    harness
        .tasks
        .store(&new_task)
        .await
        .expect("task creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_tasks_and_their_test_cases(harness: Harness) {
    let project = create_project(&harness).await;
    let other_project = create_project(&harness).await;
    let task = seed_task(&harness, project.id(), "Login").await;
    let kept = seed_task(&harness, other_project.id(), "Logout").await;
    for task_id in [task.id(), kept.id()] {
        let scenario = GherkinScenario::new("Scenario: x").expect("non-empty text");
        harness
            .test_cases
            .store(&NewTestCase::new(task_id, scenario, &DefaultClock))
            .await
            .expect("store test case");
    }

    harness
        .service
        .delete(project.id())
        .await
        .expect("delete should succeed");

    assert_eq!(harness.tasks.find_by_id(task.id()).await.expect("lookup"), None);
    assert!(
        harness
            .tasks
            .find_by_id(kept.id())
            .await
            .expect("lookup")
            .is_some()
    );
    assert!(
        harness
            .test_cases
            .list_for_task(task.id())
            .await
            .expect("list removed")
            .is_empty()
    );
    assert_eq!(
        harness
            .test_cases
            .list_for_task(kept.id())
            .await
            .expect("list kept")
            .len(),
        1
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_project_reports_not_found(harness: Harness) {
    let missing = ProjectId::new(7).expect("valid id");
    let result = harness.service.delete(missing).await;

    assert!(matches!(
        result,
        Err(ProjectServiceError::Repository(ProjectRepositoryError::NotFound(id))) if id == missing
    ));
}
