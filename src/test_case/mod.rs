//! Test-case generation for SprintHub.
//!
//! A task's description is relayed verbatim to an external Gherkin
//! generator; each successful round-trip is stored as a new test case linked
//! to the task. Failed calls store nothing and nothing is retried.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`], including the generator seam
//! - Adapter implementations in [`adapters`]
//! - The generation relay in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
