//! Unit tests for the project directory.

mod service_tests;
