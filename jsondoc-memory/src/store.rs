//! In-memory storage implementation for the document service.
//!
//! This module provides a simple backend that keeps documents in a `HashMap` guarded by
//! a single async-aware read-write lock.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;

use jsondoc_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    backend::{StoreBackend, StoreBackendBuilder},
};

type DocumentMap = HashMap<String, Document>;


/// Thread-safe in-memory document storage backend.
///
/// This struct implements the [`StoreBackend`] trait over a table that lives only as
/// long as the process.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be safely shared across async tasks. Multiple clones of the same instance
/// share the same underlying data. The whole table is one exclusion domain: any number
/// of readers may hold the lock together, a writer holds it alone.
///
/// # Example
///
/// ```ignore
/// use jsondoc_memory::InMemoryStore;
/// use jsondoc::{backend::StoreBackend, document::Document};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     store.create_document(Document::new("a", Default::default())).await?;
///
///     let docs = store.list_documents().await?;
///     assert_eq!(docs.len(), 1);
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document id -> document
    documents: Arc<RwLock<DocumentMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store whose table is pre-sized for `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(capacity))),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use jsondoc_memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::builder().capacity(1024).build().await.unwrap();
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns `true` if no documents are stored.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn create_document(&self, document: Document) -> DocumentStoreResult<()> {
        let mut documents = self.documents.write().await;

        if documents.contains_key(&document.id) {
            return Err(DocumentStoreError::DocumentAlreadyExists(document.id));
        }

        documents.insert(document.id.clone(), document);

        Ok(())
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(
            self.documents
                .read()
                .await
                .get(id)
                .cloned()
        )
    }

    async fn update_document(&self, document: Document) -> DocumentStoreResult<Document> {
        let mut documents = self.documents.write().await;

        let stored = match documents.get_mut(&document.id) {
            Some(stored) => stored,
            None => return Err(DocumentStoreError::DocumentNotFound(document.id)),
        };

        stored.replace_data(document.data);

        Ok(stored.clone())
    }

    async fn update_document_if(
        &self,
        document: Document,
        expected_version: u64,
    ) -> DocumentStoreResult<Document> {
        let mut documents = self.documents.write().await;

        let stored = match documents.get_mut(&document.id) {
            Some(stored) => stored,
            None => return Err(DocumentStoreError::DocumentNotFound(document.id)),
        };

        if stored.version != expected_version {
            return Err(DocumentStoreError::VersionConflict {
                id: document.id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        stored.replace_data(document.data);

        Ok(stored.clone())
    }

    async fn delete_document(&self, id: &str) -> DocumentStoreResult<()> {
        if self.documents.write().await.remove(id).is_none() {
            return Err(DocumentStoreError::DocumentNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn list_documents(&self) -> DocumentStoreResult<Vec<Document>> {
        Ok(
            self.documents
                .read()
                .await
                .values()
                .cloned()
                .collect()
        )
    }

    async fn shutdown(self) -> DocumentStoreResult<()> {
        let mut documents = self.documents.write().await;
        tracing::info!(count = documents.len(), "discarding in-memory documents");
        documents.clear();

        Ok(())
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder {
    capacity: usize,
}

impl InMemoryStoreBuilder {
    /// Pre-sizes the document table.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore::with_capacity(self.capacity))
    }
}
