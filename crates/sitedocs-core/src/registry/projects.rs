//! The project registry behind the project list screen.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::Result;
use crate::store::{MemoryProjectStore, ProjectStore};
use crate::types::{Project, ProjectId, normalize_name};

/// Create, search, and delete projects.
///
/// Invalid input never surfaces as an error: empty names, duplicate names, and
/// unknown ids are all silent no-ops. Errors are reserved for store failures.
pub struct ProjectRegistry {
    store: Arc<dyn ProjectStore>,
    // Serializes create so the duplicate check and the insert see the same list.
    write_lock: Mutex<()>,
}

impl ProjectRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a registry over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryProjectStore::new()))
    }

    /// Creates a project and puts it first in the list.
    ///
    /// Returns `None`, leaving the registry untouched, if the trimmed name is
    /// empty or a project with the same name (ignoring case) already exists.
    pub async fn create(&self, name: &str) -> Result<Option<Project>> {
        let Some(name) = normalize_name(name) else {
            tracing::debug!("ignoring project with empty name");
            return Ok(None);
        };

        let _guard = self.write_lock.lock().await;
        let existing = self.store.list().await?;
        if existing.iter().any(|p| p.has_name(&name)) {
            tracing::debug!(%name, "ignoring duplicate project name");
            return Ok(None);
        }

        let project = Project {
            id: ProjectId::new(),
            name,
        };
        self.store.prepend(project.clone()).await?;
        tracing::info!(id = %project.id, name = %project.name, "project created");
        Ok(Some(project))
    }

    /// Projects whose name contains `query`, ignoring case, in list order.
    pub async fn search(&self, query: &str) -> Result<Vec<Project>> {
        let projects = self.store.list().await?;
        Ok(filter_projects(&projects, query))
    }

    /// All projects, in list order.
    pub async fn list(&self) -> Result<Vec<Project>> {
        self.store.list().await
    }

    /// Looks up a project by id.
    pub async fn get(&self, id: &ProjectId) -> Result<Option<Project>> {
        self.store.get(id).await
    }

    /// Removes a project. Returns whether anything was removed.
    pub async fn delete(&self, id: &ProjectId) -> Result<bool> {
        let removed = self.store.remove(id).await?;
        match &removed {
            Some(project) => tracing::info!(%id, name = %project.name, "project deleted"),
            None => tracing::debug!(%id, "delete of unknown project ignored"),
        }
        Ok(removed.is_some())
    }

    /// Looks up the project a user asked to open.
    ///
    /// Opening only produces a notification; there is no navigation.
    pub async fn open(&self, id: &ProjectId) -> Result<Option<Project>> {
        let project = self.store.get(id).await?;
        if let Some(project) = &project {
            tracing::info!(%id, name = %project.name, "project opened");
        }
        Ok(project)
    }
}

impl std::fmt::Debug for ProjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectRegistry").finish_non_exhaustive()
    }
}

/// Filters `projects` down to those whose name contains `query`.
///
/// The query is trimmed and matched case-insensitively as a substring. An
/// empty query keeps everything. Order is preserved.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| p.name_contains(&needle))
        .cloned()
        .collect()
}
