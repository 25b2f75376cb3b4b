//! Task aggregate root.

use super::{TaskDescription, TaskId, TaskLabels, TaskPriority, TaskStatus, TaskTitle};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated task data awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: TaskTitle,
    /// Task description, the generation input.
    pub description: TaskDescription,
    /// Board column.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Free-text labels.
    pub labels: TaskLabels,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewTask {
    /// Builds a new task stamped with the current clock time.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        title: TaskTitle,
        description: TaskDescription,
        clock: &impl Clock,
    ) -> Self {
        Self {
            project_id,
            title,
            description,
            status: TaskStatus::Backlog,
            priority: TaskPriority::Medium,
            labels: TaskLabels::default(),
            due_date: None,
            created_at: clock.utc(),
        }
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Persisted task fields.
    pub fields: NewTask,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
    labels: TaskLabels,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData { id, fields } = data;
        Self {
            id,
            project_id: fields.project_id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            labels: fields.labels,
            due_date: fields.due_date,
            created_at: fields.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the board column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the labels.
    #[must_use]
    pub const fn labels(&self) -> &TaskLabels {
        &self.labels
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task to another project.
    pub const fn move_to(&mut self, project_id: ProjectId) {
        self.project_id = project_id;
    }

    /// Replaces the title.
    pub fn retitle(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: TaskDescription) {
        self.description = description;
    }

    /// Moves the task to another board column.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces the priority.
    pub const fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Replaces the labels.
    pub fn relabel(&mut self, labels: TaskLabels) {
        self.labels = labels;
    }

    /// Replaces the due date.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }
}
