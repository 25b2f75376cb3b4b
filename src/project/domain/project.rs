//! Project aggregate root and schedule types.

use super::{ProjectDescription, ProjectDomainError, ProjectId, ProjectName, ProjectProgress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form project status label such as `active` or `on-hold`.
///
/// Stored lowercase; a blank label falls back to [`ProjectStatus::ACTIVE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectStatus(String);

impl ProjectStatus {
    /// Status assigned when none is supplied.
    pub const ACTIVE: &'static str = "active";

    /// Creates a normalized status label.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let normalized = value.into().trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Self::default();
        }
        Self(normalized)
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self(Self::ACTIVE.to_owned())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Start and optional end of a project, both in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSchedule {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl ProjectSchedule {
    /// Creates a validated schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EndBeforeStart`] when `end` precedes
    /// `start`.
    pub fn new(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ProjectDomainError> {
        if end.is_some_and(|finish| finish < start) {
            return Err(ProjectDomainError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end date, if any.
    #[must_use]
    pub const fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }
}

/// Validated project data awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Project name.
    pub name: ProjectName,
    /// Project description.
    pub description: ProjectDescription,
    /// Status label.
    pub status: ProjectStatus,
    /// Completion percentage.
    pub progress: ProjectProgress,
    /// Start and end dates.
    pub schedule: ProjectSchedule,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: ProjectId,
    /// Persisted project fields.
    pub fields: NewProject,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: ProjectDescription,
    status: ProjectStatus,
    progress: ProjectProgress,
    schedule: ProjectSchedule,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let PersistedProjectData { id, fields } = data;
        Self {
            id,
            name: fields.name,
            description: fields.description,
            status: fields.status,
            progress: fields.progress,
            schedule: fields.schedule,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub const fn description(&self) -> &ProjectDescription {
        &self.description
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status(&self) -> &ProjectStatus {
        &self.status
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> ProjectProgress {
        self.progress
    }

    /// Returns the schedule.
    #[must_use]
    pub const fn schedule(&self) -> ProjectSchedule {
        self.schedule
    }

    /// Replaces the name.
    pub fn rename(&mut self, name: ProjectName) {
        self.name = name;
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: ProjectDescription) {
        self.description = description;
    }

    /// Replaces the status label.
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    /// Replaces the completion percentage.
    pub const fn set_progress(&mut self, progress: ProjectProgress) {
        self.progress = progress;
    }

    /// Replaces the schedule.
    pub const fn reschedule(&mut self, schedule: ProjectSchedule) {
        self.schedule = schedule;
    }
}
