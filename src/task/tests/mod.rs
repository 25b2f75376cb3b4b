//! Unit tests for task tracking.

mod domain_tests;
