//! Main jsondoc crate providing create/read/update/delete/list over JSON documents.
//!
//! This crate is the primary entry point for users of jsondoc. It re-exports the core
//! types from `jsondoc-core` and the in-memory backend from `jsondoc-memory`.
//!
//! # Quick Start
//!
//! ```ignore
//! use jsondoc::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = DocumentService::new(InMemoryStore::builder().build().await.unwrap());
//!
//!     let created = service
//!         .create_document("a", json!({ "x": 1 }).as_object().cloned())
//!         .await
//!         .unwrap();
//!     assert_eq!(created.created_at, created.updated_at);
//!
//!     let updated = service
//!         .update_document("a", json!({ "x": 2 }).as_object().cloned())
//!         .await
//!         .unwrap();
//!     assert!(updated.updated_at > updated.created_at);
//!
//!     service.delete_document("a").await.unwrap();
//!     assert!(matches!(
//!         service.get_document("a").await,
//!         Err(DocumentServiceError::DocumentNotFound(_))
//!     ));
//!
//!     service.shutdown().await.unwrap();
//! }
//! ```
//!
//! # Versioned updates
//!
//! Every document carries a `version` that starts at 1 and grows with each update.
//! [`DocumentService::update_document_with_version`](service::DocumentService::update_document_with_version)
//! only applies an update while the stored version still matches the one the caller read:
//!
//! ```ignore
//! let doc = service.get_document("a").await?;
//! service
//!     .update_document_with_version("a", Some(new_data), doc.version)
//!     .await?;
//! ```
//!
//! # Backends
//!
//! - [`memory`] - In-process storage; all state is lost on restart

pub mod prelude;

pub use jsondoc_core::{backend, document, error, service};

// Re-export JSON types for convenience
pub use serde_json;

/// In-memory storage backend implementations.
pub mod memory {
    pub use jsondoc_memory::{InMemoryStore, InMemoryStoreBuilder};
}
