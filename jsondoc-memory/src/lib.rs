//! In-memory document storage backend for jsondoc.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It uses an async-aware read-write lock for concurrent access. All state is lost when
//! the process exits.
//!
//! # Quick Start
//!
//! ```ignore
//! use jsondoc::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryStore::builder().build().await?;
//!     let service = DocumentService::new(backend);
//!
//!     service
//!         .create_document("a", json!({ "x": 1 }).as_object().cloned())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as jsondoc_memory;

pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
