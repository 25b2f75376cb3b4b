//! SprintHub: task tracking with generated Gherkin test cases.
//!
//! This crate provides the backend for a small-team Kanban tracker. Users,
//! projects, and tasks live in a relational store behind a JSON HTTP API.
//! A task's description can be relayed to an external text-generation
//! service, and the Gherkin scenario it returns is stored as a test case
//! linked to the task.
//!
//! # Architecture
//!
//! SprintHub follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, memory)
//!
//! # Modules
//!
//! - [`user`]: User registration and lookup
//! - [`project`]: Projects and their teams
//! - [`task`]: Tasks, status changes, and assignees
//! - [`test_case`]: The Gherkin generation relay
//! - [`api`]: actix-web routes and handlers
//! - [`config`], [`telemetry`], [`persistence`]: process plumbing

pub mod api;
pub mod config;
pub mod persistence;
pub mod project;
pub mod task;
pub mod telemetry;
pub mod test_case;
pub mod user;
