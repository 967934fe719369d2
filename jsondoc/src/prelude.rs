//! Convenient re-exports of commonly used types from jsondoc.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use jsondoc::prelude::*;
//! ```

pub use jsondoc_core::{
    service::DocumentService,
    document::{Document, DocumentData},
    backend::{StoreBackend, StoreBackendBuilder},
    error::{DocumentStoreError, DocumentStoreResult, DocumentServiceError, DocumentServiceResult},
};
