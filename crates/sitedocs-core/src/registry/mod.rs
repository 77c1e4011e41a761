//! Registries: the record lists each screen reads and mutates.

mod documents;
mod projects;
mod proptests;

pub use documents::{
    DEFAULT_INTAKE_DELAY, DocumentRegistry, PendingIntake, Section, group_documents,
};
pub use projects::{ProjectRegistry, filter_projects};
