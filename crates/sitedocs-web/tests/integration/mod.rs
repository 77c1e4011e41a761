//! Integration test modules.

mod documents;
mod projects;
