//! Domain model for projects and their schedules.

mod error;
mod ids;
mod project;

pub use error::ProjectDomainError;
pub use ids::{ProjectDescription, ProjectId, ProjectName, ProjectProgress};
pub use project::{NewProject, PersistedProjectData, Project, ProjectSchedule, ProjectStatus};
