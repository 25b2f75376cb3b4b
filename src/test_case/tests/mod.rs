//! Unit tests for test-case generation.
