//! Property-based tests for composite driving.
