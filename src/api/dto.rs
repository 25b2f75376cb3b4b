//! Request and response bodies. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::project::domain::Project;
use crate::task::domain::{Task, TaskPriority, TaskStatus};
use crate::test_case::domain::TestCase;
use crate::user::domain::{User, UserRole};

/// Body of `POST /testcase/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestCaseBody {
    /// Task whose description is sent to the generator.
    pub project_task_id: i64,
}

/// Success body of `POST /testcase/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestCaseResponse {
    /// Identifier of the stored test case.
    pub test_case_id: i64,
    /// Generated scenario, verbatim.
    pub gherkin: String,
}

impl From<TestCase> for GenerateTestCaseResponse {
    fn from(test_case: TestCase) -> Self {
        let test_case_id = test_case.id().value();
        Self {
            test_case_id,
            gherkin: test_case.into_gherkin().into_inner(),
        }
    }
}

/// A stored test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResponse {
    /// Test-case identifier.
    pub id: i64,
    /// Originating task.
    pub task_id: i64,
    /// Generated scenario.
    pub gherkin: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&TestCase> for TestCaseResponse {
    fn from(test_case: &TestCase) -> Self {
        Self {
            id: test_case.id().value(),
            task_id: test_case.task_id().value(),
            gherkin: test_case.gherkin().as_str().to_owned(),
            created_at: test_case.created_at(),
        }
    }
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Initial status; defaults to `backlog`.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority; defaults to `medium`.
    #[serde(default)]
    pub priority: Option<String>,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/tasks/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// New owning project.
    pub project_id: Option<i64>,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<String>,
    /// New priority.
    pub priority: Option<String>,
    /// New labels.
    pub labels: Option<Vec<String>>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/tasks/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusBody {
    /// New board column.
    pub status: String,
}

/// A task as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Board column.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Labels.
    pub labels: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            project_id: task.project_id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status(),
            priority: task.priority(),
            labels: task.labels().as_slice().to_vec(),
            created_at: task.created_at(),
            due_date: task.due_date(),
        }
    }
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Status label; defaults to `active`.
    #[serde(default)]
    pub status: Option<String>,
    /// Completion percentage; defaults to 0.
    #[serde(default)]
    pub progress: Option<i64>,
    /// Start date.
    pub start_date: DateTime<Utc>,
    /// End date.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/projects/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectBody {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status label.
    pub status: Option<String>,
    /// New completion percentage.
    pub progress: Option<i64>,
    /// New start date.
    pub start_date: Option<DateTime<Utc>>,
    /// New end date.
    pub end_date: Option<DateTime<Utc>>,
    /// User to add to the team.
    pub user_id_to_add: Option<i64>,
}

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    /// Project identifier.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Completion percentage.
    pub progress: u8,
    /// Start date.
    pub start_date: DateTime<Utc>,
    /// End date.
    pub end_date: Option<DateTime<Utc>>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            name: project.name().as_str().to_owned(),
            description: project.description().as_str().to_owned(),
            status: project.status().as_str().to_owned(),
            progress: project.progress().value(),
            start_date: project.schedule().start(),
            end_date: project.schedule().end(),
        }
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserBody {
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Role; defaults to `member`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `PUT /api/users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUserBody {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role.
    pub role: Option<String>,
}

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: UserRole,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            role: user.role(),
        }
    }
}
