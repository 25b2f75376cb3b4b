//! Diesel row models for task persistence.

use super::schema::{task_assignments, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board column.
    pub status: String,
    /// Urgency.
    pub priority: String,
    /// Free-text labels.
    pub labels: Vec<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board column.
    pub status: String,
    /// Urgency.
    pub priority: String,
    /// Free-text labels.
    pub labels: Vec<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Update model for mutable task fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board column.
    pub status: String,
    /// Urgency.
    pub priority: String,
    /// Free-text labels.
    pub labels: Vec<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Insert model for assignment rows.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = task_assignments)]
pub struct TaskAssignmentRow {
    /// Task identifier.
    pub task_id: i64,
    /// User identifier.
    pub user_id: i64,
}
