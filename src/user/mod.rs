//! User directory for SprintHub.
//!
//! Users are the people that projects are staffed with and tasks are
//! assigned to. The directory stores identity fields only; credentials and
//! token issuance live outside this crate. The module follows hexagonal
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
