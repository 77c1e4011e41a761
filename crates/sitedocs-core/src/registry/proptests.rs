//! Property-based tests for the registries.
