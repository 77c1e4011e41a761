//! Shared application state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use sitedocs_core::{
    DEFAULT_INTAKE_DELAY, DocumentRegistry, DocumentStore, MemoryDocumentStore, ProjectRegistry,
};
use tokio::sync::RwLock;

use crate::config::SiteDocsConfig;

type StoreFactory = Arc<dyn Fn() -> Arc<dyn DocumentStore> + Send + Sync>;

/// Document registries keyed by the project path segment.
///
/// A registry is created by the first upload to its project and lives as
/// long as the process. Reads never create one.
pub struct DocumentWorkspaces {
    registries: RwLock<HashMap<String, Arc<DocumentRegistry>>>,
    delay: Duration,
    store_factory: StoreFactory,
}

impl DocumentWorkspaces {
    /// In-memory workspaces with the given intake delay.
    pub fn new(delay: Duration) -> Self {
        Self::with_store_factory(delay, || Arc::new(MemoryDocumentStore::new()))
    }

    /// Workspaces whose registries get their store from `factory`.
    pub fn with_store_factory<F>(delay: Duration, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn DocumentStore> + Send + Sync + 'static,
    {
        Self {
            registries: RwLock::new(HashMap::new()),
            delay,
            store_factory: Arc::new(factory),
        }
    }

    /// The registry for `project_id`, creating it if needed.
    pub async fn get_or_create(&self, project_id: &str) -> Arc<DocumentRegistry> {
        if let Some(registry) = self.registries.read().await.get(project_id) {
            return registry.clone();
        }

        let mut registries = self.registries.write().await;
        registries
            .entry(project_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(%project_id, "creating document registry");
                Arc::new(
                    DocumentRegistry::new((self.store_factory)(), project_id)
                        .with_delay(self.delay),
                )
            })
            .clone()
    }

    /// The registry for `project_id`, if one exists yet.
    pub async fn get(&self, project_id: &str) -> Option<Arc<DocumentRegistry>> {
        self.registries.read().await.get(project_id).cloned()
    }

    /// Number of projects with a registry.
    pub async fn len(&self) -> usize {
        self.registries.read().await.len()
    }

    /// Returns `true` if no registry has been created.
    pub async fn is_empty(&self) -> bool {
        self.registries.read().await.is_empty()
    }
}

impl Default for DocumentWorkspaces {
    fn default() -> Self {
        Self::new(DEFAULT_INTAKE_DELAY)
    }
}

impl std::fmt::Debug for DocumentWorkspaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentWorkspaces")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// State handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Projects shown on the list screen
    pub projects: Arc<ProjectRegistry>,

    /// Per-project document registries
    pub workspaces: Arc<DocumentWorkspaces>,

    /// Upload request body limit
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(
        projects: ProjectRegistry,
        workspaces: DocumentWorkspaces,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            projects: Arc::new(projects),
            workspaces: Arc::new(workspaces),
            max_upload_bytes,
        }
    }

    /// In-memory state configured from `config`.
    pub fn from_config(config: &SiteDocsConfig) -> Self {
        Self::new(
            ProjectRegistry::in_memory(),
            DocumentWorkspaces::new(config.intake_delay()),
            config.intake.max_upload_bytes,
        )
    }
}
