#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Sitedocs Core Library
//!
//! Domain types, storage traits, and the two in-memory registries behind the
//! sitedocs screens:
//! - [`ProjectRegistry`]: create, search, and delete projects
//! - [`DocumentRegistry`]: simulated document intake, grouping by category, removal
//! - [`UploadTracker`]: observable "uploading" flag for in-flight intakes
//! - [`format_size`]: human-readable byte counts

pub mod error;
pub mod registry;
pub mod size;
pub mod store;
pub mod types;
pub mod upload;

// Re-exports for convenience
pub use error::{Error, Result};
pub use registry::{
    DEFAULT_INTAKE_DELAY, DocumentRegistry, ProjectRegistry, Section, filter_projects,
    group_documents,
};
pub use size::format_size;
pub use store::{DocumentStore, MemoryDocumentStore, MemoryProjectStore, ProjectStore};
pub use types::{Document, DocumentCategory, DocumentId, FileHandle, Project, ProjectId};
pub use upload::UploadTracker;
