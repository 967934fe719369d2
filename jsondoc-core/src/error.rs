//! Error types and result types for store and service operations.
//!
//! Two layers report failures:
//!
//! - [`DocumentStoreError`] is raised by a [`StoreBackend`](crate::backend::StoreBackend)
//!   from the operations that require a document to be present or absent.
//! - [`DocumentServiceError`] is what callers of the
//!   [`DocumentService`](crate::service::DocumentService) see. It adds input validation
//!   failures and keeps every failure kind distinct.

use thiserror::Error;

/// Represents all possible errors that can occur inside a storage backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    /// A document with the given ID is already stored.
    #[error("document already exists: {0}")]
    DocumentAlreadyExists(String),
    /// No document with the given ID is stored.
    #[error("document not found: {0}")]
    DocumentNotFound(String),
    /// The stored document's version did not match the caller's precondition.
    #[error("document {id} is at version {actual}, expected {expected}")]
    VersionConflict {
        id: String,
        expected: u64,
        actual: u64,
    },
    /// An error occurred in the underlying storage backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for storage backend operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Failures surfaced by the document service.
///
/// Every variant except [`DocumentServiceError::Store`] is an expected outcome that the
/// caller can act on; none of them is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentServiceError {
    /// An empty document ID was supplied.
    #[error("invalid document ID")]
    InvalidId,
    /// No data payload was supplied.
    #[error("invalid document data")]
    InvalidData,
    /// The operation targets a document that does not exist.
    #[error("document not found: {0}")]
    DocumentNotFound(String),
    /// A create targets an ID that is already taken.
    #[error("document already exists: {0}")]
    DocumentAlreadyExists(String),
    /// A versioned update lost against a concurrent writer.
    #[error("document {id} is at version {actual}, expected {expected}")]
    VersionConflict {
        id: String,
        expected: u64,
        actual: u64,
    },
    /// Any other backend failure.
    #[error(transparent)]
    Store(DocumentStoreError),
}

/// A specialized `Result` type for document service operations.
pub type DocumentServiceResult<T> = Result<T, DocumentServiceError>;

impl From<DocumentStoreError> for DocumentServiceError {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::DocumentAlreadyExists(id) => {
                DocumentServiceError::DocumentAlreadyExists(id)
            }
            DocumentStoreError::DocumentNotFound(id) => DocumentServiceError::DocumentNotFound(id),
            DocumentStoreError::VersionConflict {
                id,
                expected,
                actual,
            } => DocumentServiceError::VersionConflict {
                id,
                expected,
                actual,
            },
            other => DocumentServiceError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_kinds_stay_distinct_at_the_service_layer() {
        assert_eq!(
            DocumentServiceError::from(DocumentStoreError::DocumentAlreadyExists("a".into())),
            DocumentServiceError::DocumentAlreadyExists("a".into())
        );
        assert_eq!(
            DocumentServiceError::from(DocumentStoreError::DocumentNotFound("a".into())),
            DocumentServiceError::DocumentNotFound("a".into())
        );
        assert_eq!(
            DocumentServiceError::from(DocumentStoreError::VersionConflict {
                id: "a".into(),
                expected: 1,
                actual: 2,
            }),
            DocumentServiceError::VersionConflict {
                id: "a".into(),
                expected: 1,
                actual: 2,
            }
        );
    }

    #[test]
    fn backend_failures_are_wrapped() {
        let err = DocumentServiceError::from(DocumentStoreError::Backend("lock poisoned".into()));

        assert_eq!(
            err,
            DocumentServiceError::Store(DocumentStoreError::Backend("lock poisoned".into()))
        );
        assert_eq!(err.to_string(), "backend error: lock poisoned");
    }

    #[test]
    fn both_layers_share_one_message_register() {
        let store = [
            DocumentStoreError::DocumentAlreadyExists("a".into()),
            DocumentStoreError::DocumentNotFound("a".into()),
            DocumentStoreError::VersionConflict {
                id: "a".into(),
                expected: 1,
                actual: 2,
            },
        ];

        for err in store {
            assert_eq!(err.to_string(), DocumentServiceError::from(err.clone()).to_string());
        }
        assert!(DocumentStoreError::Backend("x".into()).to_string().starts_with("backend"));
    }
}
