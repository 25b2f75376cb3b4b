//! Project directory for SprintHub.
//!
//! Projects own tasks and are staffed by a team of users. Team membership is
//! a join relation exposed through its own port so that both directions
//! (members of a project, projects of a user) are explicit queries. The
//! module follows hexagonal architecture:
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
