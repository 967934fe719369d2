//! Document use-case layer.
//!
//! [`DocumentService`] validates caller input, applies the existence policy of each
//! operation, and delegates storage to a [`StoreBackend`]. It holds nothing but the
//! backend handle, so one instance can be shared by every request.
//!
//! # Example
//!
//! ```ignore
//! use jsondoc::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! let service = DocumentService::new(InMemoryStore::new());
//! let data = json!({ "x": 1 }).as_object().cloned();
//!
//! let created = service.create_document("a", data).await?;
//! let fetched = service.get_document("a").await?;
//! assert_eq!(created, fetched);
//! ```

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentData},
    error::{DocumentServiceError, DocumentServiceResult},
};

/// Validation and orchestration layer over a storage backend.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentService<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentService<B> {
    /// Creates a new service over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates a document and returns it.
    ///
    /// `data` must be present; an empty object is accepted.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is empty
    /// - `InvalidData` if `data` is `None`
    /// - `DocumentAlreadyExists` if the ID is taken
    pub async fn create_document(
        &self,
        id: &str,
        data: Option<DocumentData>,
    ) -> DocumentServiceResult<Document> {
        validate_id(id)?;
        let data = validate_data(data)?;

        let document = Document::new(id, data);
        self.backend
            .create_document(document.clone())
            .await?;

        tracing::debug!(id, "document created");
        Ok(document)
    }

    /// Fetches a document by ID.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is empty
    /// - `DocumentNotFound` if no such document exists
    pub async fn get_document(&self, id: &str) -> DocumentServiceResult<Document> {
        validate_id(id)?;

        self.find(id).await
    }

    /// Replaces the data of an existing document and returns the result.
    ///
    /// The returned `version` and `updated_at` are the ones the backend assigned, so
    /// concurrent updates of one document never report the same version.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is empty
    /// - `InvalidData` if `data` is `None`
    /// - `DocumentNotFound` if no such document exists
    pub async fn update_document(
        &self,
        id: &str,
        data: Option<DocumentData>,
    ) -> DocumentServiceResult<Document> {
        validate_id(id)?;
        let data = validate_data(data)?;

        let current = self.find(id).await?;
        let document = self
            .backend
            .update_document(Document { data, ..current })
            .await?;

        tracing::debug!(id, version = document.version, "document updated");
        Ok(document)
    }

    /// Like [`update_document`](Self::update_document), but only succeeds while the
    /// stored document is still at `expected_version`.
    ///
    /// # Errors
    ///
    /// As [`update_document`](Self::update_document), plus `VersionConflict` when the
    /// stored version differs from `expected_version`.
    pub async fn update_document_with_version(
        &self,
        id: &str,
        data: Option<DocumentData>,
        expected_version: u64,
    ) -> DocumentServiceResult<Document> {
        validate_id(id)?;
        let data = validate_data(data)?;

        let current = self.find(id).await?;
        if current.version != expected_version {
            return Err(DocumentServiceError::VersionConflict {
                id: id.to_string(),
                expected: expected_version,
                actual: current.version,
            });
        }

        let document = self
            .backend
            .update_document_if(Document { data, ..current }, expected_version)
            .await?;

        tracing::debug!(id, version = document.version, "document updated");
        Ok(document)
    }

    /// Deletes a document.
    ///
    /// Existence is checked before the store is asked to delete, so a missing document
    /// is reported as `DocumentNotFound` by this layer rather than by the backend.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is empty
    /// - `DocumentNotFound` if no such document exists
    pub async fn delete_document(&self, id: &str) -> DocumentServiceResult<()> {
        validate_id(id)?;

        self.find(id).await?;
        self.backend.delete_document(id).await?;

        tracing::debug!(id, "document deleted");
        Ok(())
    }

    /// Lists every stored document in no particular order.
    pub async fn list_documents(&self) -> DocumentServiceResult<Vec<Document>> {
        Ok(self.backend.list_documents().await?)
    }

    /// Shuts down the service and releases backend resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to shut down.
    pub async fn shutdown(self) -> DocumentServiceResult<()> {
        self.backend.shutdown().await?;

        Ok(())
    }

    async fn find(&self, id: &str) -> DocumentServiceResult<Document> {
        self.backend
            .get_document(id)
            .await?
            .ok_or_else(|| DocumentServiceError::DocumentNotFound(id.to_string()))
    }
}

fn validate_id(id: &str) -> DocumentServiceResult<()> {
    if id.is_empty() {
        tracing::warn!("rejected request with empty document id");
        return Err(DocumentServiceError::InvalidId);
    }

    Ok(())
}

fn validate_data(data: Option<DocumentData>) -> DocumentServiceResult<DocumentData> {
    data.ok_or_else(|| {
        tracing::warn!("rejected request without document data");
        DocumentServiceError::InvalidData
    })
}
