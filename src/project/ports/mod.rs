//! Port contracts for the project directory.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;
pub mod team;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use team::ProjectTeamRepository;
