//! Storage traits for the registries.
//!
//! Registries never touch their records directly: they go through a
//! [`ProjectStore`] or [`DocumentStore`], so an in-memory store can be swapped
//! for a persistent one without touching the registry logic.

mod memory;

pub use memory::{MemoryDocumentStore, MemoryProjectStore};

use async_trait::async_trait;

use crate::Result;
use crate::types::{Document, DocumentId, Project, ProjectId};

/// Ordered storage for project records.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// All records, in display order (most recently created first).
    async fn list(&self) -> Result<Vec<Project>>;

    /// Looks up a record by id.
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>>;

    /// Inserts a record at the front.
    async fn prepend(&self, project: Project) -> Result<()>;

    /// Removes a record, returning it if it was present.
    async fn remove(&self, id: &ProjectId) -> Result<Option<Project>>;
}

/// Ordered storage for document records.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<Document>>;

    /// Looks up a record by id.
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>>;

    /// Appends records at the end, preserving their order.
    async fn append(&self, documents: Vec<Document>) -> Result<()>;

    /// Removes a record, returning it if it was present.
    async fn remove(&self, id: &DocumentId) -> Result<Option<Document>>;
}
