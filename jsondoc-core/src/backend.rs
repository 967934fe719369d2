//! Storage backend abstraction for the document service.
//!
//! This module defines the traits that separate the [`DocumentService`](crate::service::DocumentService)
//! from the table that actually holds documents.
//!
//! # Overview
//!
//! The [`StoreBackend`] trait provides a unified async interface for the five document
//! operations plus a versioned update. Implementations are required to be thread-safe
//! (`Send + Sync`) and to support concurrent access.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use jsondoc::backend::StoreBackend;
//! use jsondoc::document::Document;
//!
//! let backend = MyBackendImpl::new();
//!
//! backend.create_document(Document::new("a", data)).await?;
//! let found = backend.get_document("a").await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

use crate::{document::Document, error::DocumentStoreResult};

/// Abstract interface for document storage backends.
///
/// # Ownership
///
/// Documents cross this boundary by value. A backend takes ownership of what it is given
/// and returns clones of what it holds, so no caller ever shares structure with stored
/// state.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. Reads may run concurrently with other reads; a mutation must exclude
/// every other operation for its duration.
///
/// # Error Handling
///
/// Only the operations that require presence or absence fail with
/// [`DocumentAlreadyExists`](crate::error::DocumentStoreError::DocumentAlreadyExists) or
/// [`DocumentNotFound`](crate::error::DocumentStoreError::DocumentNotFound). Lookups report
/// absence as `Ok(None)`.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts a new document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentAlreadyExists` if a document with the same ID is already stored.
    async fn create_document(&self, document: Document) -> DocumentStoreResult<()>;

    /// Retrieves a copy of the document with the given ID.
    ///
    /// Returns `Ok(None)` when no such document exists.
    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Replaces the body of the stored document that has the same ID with
    /// `document.data`. This is not a merge.
    ///
    /// `version` and `updated_at` are advanced from the stored record while the write
    /// lock is held, so every successful update yields a distinct version. The values
    /// carried by `document` for those fields are ignored. Returns a copy of the
    /// record as stored.
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` if no document with that ID is stored.
    async fn update_document(&self, document: Document) -> DocumentStoreResult<Document>;

    /// Like [`update_document`](Self::update_document), but only if the stored record
    /// is still at `expected_version`.
    ///
    /// The version check and the replacement happen atomically.
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` if no document with that ID is stored, or
    /// `VersionConflict` if the stored version differs from `expected_version`.
    async fn update_document_if(
        &self,
        document: Document,
        expected_version: u64,
    ) -> DocumentStoreResult<Document>;

    /// Removes the document with the given ID.
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` if no document with that ID is stored.
    async fn delete_document(&self, id: &str) -> DocumentStoreResult<()>;

    /// Returns copies of every stored document.
    ///
    /// The order is unspecified and callers must not depend on it.
    async fn list_documents(&self) -> DocumentStoreResult<Vec<Document>>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op.
    async fn shutdown(self) -> DocumentStoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn create_document(&self, document: Document) -> DocumentStoreResult<()> {
        (*self).create_document(document).await
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (*self).get_document(id).await
    }

    async fn update_document(&self, document: Document) -> DocumentStoreResult<Document> {
        (*self).update_document(document).await
    }

    async fn update_document_if(
        &self,
        document: Document,
        expected_version: u64,
    ) -> DocumentStoreResult<Document> {
        (*self)
            .update_document_if(document, expected_version)
            .await
    }

    async fn delete_document(&self, id: &str) -> DocumentStoreResult<()> {
        (*self).delete_document(id).await
    }

    async fn list_documents(&self) -> DocumentStoreResult<Vec<Document>> {
        (*self).list_documents().await
    }
}

#[async_trait]
impl<B> StoreBackend for Arc<B>
where
    B: StoreBackend,
{
    async fn create_document(&self, document: Document) -> DocumentStoreResult<()> {
        (**self).create_document(document).await
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).get_document(id).await
    }

    async fn update_document(&self, document: Document) -> DocumentStoreResult<Document> {
        (**self).update_document(document).await
    }

    async fn update_document_if(
        &self,
        document: Document,
        expected_version: u64,
    ) -> DocumentStoreResult<Document> {
        (**self)
            .update_document_if(document, expected_version)
            .await
    }

    async fn delete_document(&self, id: &str) -> DocumentStoreResult<()> {
        (**self).delete_document(id).await
    }

    async fn list_documents(&self) -> DocumentStoreResult<Vec<Document>> {
        (**self).list_documents().await
    }
}

/// Factory trait for constructing a backend.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> DocumentStoreResult<Self::Backend>;
}
