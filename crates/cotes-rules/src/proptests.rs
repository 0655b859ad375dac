//! Property-based tests for rule construction.
