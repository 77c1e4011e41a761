//! In-memory stores backed by a locked `Vec`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DocumentStore, ProjectStore};
use crate::Result;
use crate::types::{Document, DocumentId, Project, ProjectId};

/// Process-local project storage. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl MemoryProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }

    async fn get(&self, id: &ProjectId) -> Result<Option<Project>> {
        Ok(self.projects.read().await.iter().find(|p| p.id == *id).cloned())
    }

    async fn prepend(&self, project: Project) -> Result<()> {
        self.projects.write().await.insert(0, project);
        Ok(())
    }

    async fn remove(&self, id: &ProjectId) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        Ok(projects
            .iter()
            .position(|p| p.id == *id)
            .map(|idx| projects.remove(idx)))
    }
}

/// Process-local document storage. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self) -> Result<Vec<Document>> {
        Ok(self.documents.read().await.clone())
    }

    async fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        Ok(self.documents.read().await.iter().find(|d| d.id == *id).cloned())
    }

    async fn append(&self, documents: Vec<Document>) -> Result<()> {
        self.documents.write().await.extend(documents);
        Ok(())
    }

    async fn remove(&self, id: &DocumentId) -> Result<Option<Document>> {
        let mut documents = self.documents.write().await;
        Ok(documents
            .iter()
            .position(|d| d.id == *id)
            .map(|idx| documents.remove(idx)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{DocumentCategory, FileHandle};
    use chrono::Utc;

    fn project(name: &str) -> Project {
        Project::from_input(name).unwrap()
    }

    fn document(name: &str) -> Document {
        Document::from_file(FileHandle::new(name, 10), DocumentCategory::Other, Utc::now())
    }

    #[tokio::test]
    async fn test_project_store_prepends() {
        let store = MemoryProjectStore::new();
        store.prepend(project("first")).await.unwrap();
        store.prepend(project("second")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_project_store_remove_missing_is_none() {
        let store = MemoryProjectStore::new();
        store.prepend(project("only")).await.unwrap();
        assert!(store.remove(&ProjectId::new()).await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_project_store_get_and_remove() {
        let store = MemoryProjectStore::new();
        let p = project("target");
        let id = p.id;
        store.prepend(p).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap().unwrap().name, "target");
        assert_eq!(store.remove(&id).await.unwrap().unwrap().id, id);
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_document_store_appends_in_order() {
        let store = MemoryDocumentStore::new();
        store
            .append(vec![document("a.pdf"), document("b.pdf")])
            .await
            .unwrap();
        store.append(vec![document("c.pdf")]).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[tokio::test]
    async fn test_document_store_remove() {
        let store = MemoryDocumentStore::new();
        let doc = document("plan.dwg");
        let id = doc.id;
        store.append(vec![doc]).await.unwrap();

        assert!(store.get(&id).await.unwrap().is_some());
        assert!(store.remove(&id).await.unwrap().is_some());
        assert!(store.remove(&id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }
}
