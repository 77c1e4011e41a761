//! Core types for projects and documents.

mod category;
mod document;
mod ids;
mod project;

pub use category::DocumentCategory;
pub use document::{Document, FileHandle};
pub use ids::{DocumentId, ProjectId};
pub use project::{Project, normalize_name};
