//! Core of the jsondoc service: the document model, the storage abstraction and the
//! use-case layer that sits between a transport and a store.
//!
//! This crate provides:
//!
//! - **Document model** ([`document`]) - The stored entity and its JSON payload type
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document service** ([`service`]) - Input validation and existence policy over a backend
//! - **Error handling** ([`error`]) - Store-level and service-level error types
//!
//! # Example
//!
//! ```ignore
//! use jsondoc_core::service::DocumentService;
//! use serde_json::json;
//!
//! let service = DocumentService::new(backend);
//!
//! let doc = service
//!     .create_document("a", json!({ "x": 1 }).as_object().cloned())
//!     .await?;
//!
//! assert_eq!(doc.created_at, doc.updated_at);
//! ```

#[allow(unused_extern_crates)]
extern crate self as jsondoc_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod service;
