//! Task tracking for SprintHub.
//!
//! Tasks are the units of work on a project's Kanban board and the input to
//! test-case generation. This module covers task creation and editing,
//! status changes, and assignment of users to tasks. Assignment is a join
//! relation with its own port so that both directions (assignees of a task,
//! tasks of a user) are explicit queries. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
