//! The document registry behind the project screen.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::Result;
use crate::store::{DocumentStore, MemoryDocumentStore};
use crate::types::{Document, DocumentCategory, DocumentId, FileHandle};
use crate::upload::{UploadGuard, UploadTracker};

/// Simulated upload latency used when none is configured.
pub const DEFAULT_INTAKE_DELAY: Duration = Duration::from_millis(1000);

/// One category's documents, as shown under a section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The category this section lists
    pub category: DocumentCategory,

    /// Its documents, in insertion order
    pub documents: Vec<Document>,
}

/// Document intake, grouping, and removal for one project.
pub struct DocumentRegistry {
    store: Arc<dyn DocumentStore>,
    selected: RwLock<DocumentCategory>,
    tracker: UploadTracker,
    delay: Duration,
}

impl DocumentRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn DocumentStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            selected: RwLock::new(DocumentCategory::default()),
            tracker: UploadTracker::new(name),
            delay: DEFAULT_INTAKE_DELAY,
        }
    }

    /// Creates a registry over a fresh in-memory store.
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryDocumentStore::new()), name)
    }

    /// Sets the simulated upload latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The simulated upload latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sets the category used for subsequent intakes.
    pub fn select_category(&self, category: DocumentCategory) {
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = category;
    }

    /// The category used for subsequent intakes.
    pub fn selected_category(&self) -> DocumentCategory {
        *self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` while an intake is waiting to commit.
    pub fn is_uploading(&self) -> bool {
        self.tracker.is_uploading()
    }

    /// The tracker behind [`is_uploading`](Self::is_uploading).
    pub fn tracker(&self) -> &UploadTracker {
        &self.tracker
    }

    /// Builds records for `files` and marks the intake as in flight.
    ///
    /// Nothing is stored until [`PendingIntake::commit`] runs. Returns `None`
    /// for an empty selection, without touching the uploading flag.
    pub fn begin_intake(
        &self,
        files: Vec<FileHandle>,
        category: DocumentCategory,
    ) -> Option<PendingIntake> {
        if files.is_empty() {
            return None;
        }

        let now = Utc::now();
        let documents = files
            .into_iter()
            .map(|file| Document::from_file(file, category, now))
            .collect();

        Some(PendingIntake {
            documents,
            store: self.store.clone(),
            delay: self.delay,
            _guard: self.tracker.begin(),
        })
    }

    /// Takes in `files` under `category`, waits out the simulated upload, and
    /// appends the new records in input order.
    pub async fn intake(
        &self,
        files: Vec<FileHandle>,
        category: DocumentCategory,
    ) -> Result<Vec<Document>> {
        match self.begin_intake(files, category) {
            Some(pending) => pending.commit().await,
            None => Ok(Vec::new()),
        }
    }

    /// Like [`intake`](Self::intake), but runs the wait and commit on a
    /// detached task. The uploading flag is already set when this returns.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_intake(
        &self,
        files: Vec<FileHandle>,
        category: DocumentCategory,
    ) -> Option<JoinHandle<Result<Vec<Document>>>> {
        let pending = self.begin_intake(files, category)?;
        Some(tokio::spawn(async move {
            let result = pending.commit().await;
            if let Err(err) = &result {
                tracing::error!(error = %err, "document intake failed to commit");
            }
            result
        }))
    }

    /// All documents, in insertion order.
    pub async fn list(&self) -> Result<Vec<Document>> {
        self.store.list().await
    }

    /// Documents in `category`, in insertion order.
    pub async fn group_by_type(&self, category: DocumentCategory) -> Result<Vec<Document>> {
        let documents = self.store.list().await?;
        Ok(documents
            .into_iter()
            .filter(|d| d.category == category)
            .collect())
    }

    /// Non-empty category sections, in display order.
    pub async fn sections(&self) -> Result<Vec<Section>> {
        let documents = self.store.list().await?;
        Ok(group_documents(&documents))
    }

    /// Removes a document. Returns whether anything was removed.
    pub async fn remove(&self, id: &DocumentId) -> Result<bool> {
        let removed = self.store.remove(id).await?;
        match &removed {
            Some(doc) => tracing::info!(%id, name = %doc.name, "document removed"),
            None => tracing::debug!(%id, "remove of unknown document ignored"),
        }
        Ok(removed.is_some())
    }

    /// Looks up a document by id.
    pub async fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        self.store.get(id).await
    }

    /// Looks up the document a user asked to view.
    ///
    /// Viewing only produces a notification; the file is never retrieved.
    pub async fn view(&self, id: &DocumentId) -> Result<Option<Document>> {
        let doc = self.store.get(id).await?;
        if let Some(doc) = &doc {
            tracing::info!(%id, name = %doc.name, "document viewed");
        }
        Ok(doc)
    }
}

impl std::fmt::Debug for DocumentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRegistry")
            .field("selected", &self.selected_category())
            .field("tracker", &self.tracker)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Records built by [`DocumentRegistry::begin_intake`], waiting to be stored.
///
/// Dropping this without committing discards the records and clears the
/// in-flight mark.
pub struct PendingIntake {
    documents: Vec<Document>,
    store: Arc<dyn DocumentStore>,
    delay: Duration,
    _guard: UploadGuard,
}

impl PendingIntake {
    /// The records that will be stored.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Waits out the simulated upload, then appends the records.
    pub async fn commit(self) -> Result<Vec<Document>> {
        tokio::time::sleep(self.delay).await;
        self.store.append(self.documents.clone()).await?;
        tracing::info!(count = self.documents.len(), "documents uploaded");
        Ok(self.documents)
    }
}

impl std::fmt::Debug for PendingIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingIntake")
            .field("documents", &self.documents.len())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Splits `documents` into per-category sections in display order, skipping
/// categories with nothing in them.
pub fn group_documents(documents: &[Document]) -> Vec<Section> {
    DocumentCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let documents: Vec<Document> = documents
                .iter()
                .filter(|d| d.category == category)
                .cloned()
                .collect();
            (!documents.is_empty()).then_some(Section {
                category,
                documents,
            })
        })
        .collect()
}
