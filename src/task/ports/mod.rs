//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod assignment;
pub mod repository;

pub use assignment::TaskAssignmentRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
