//! Unit tests for the HTTP layer.

mod error_tests;
