//! # API Module
//!
//! HTTP interface over the document service.
//!
//! ## Endpoints Overview
//!
//! - `GET /health` - Liveness check, independent of the store
//! - `POST /documents` - Create document
//! - `GET /documents` - List documents
//! - `GET /documents/{id}` - Get document by ID
//! - `PUT /documents/{id}` - Replace document data, optionally guarded by `version`
//! - `DELETE /documents/{id}` - Delete document
//!
//! Every body is wrapped in [`ApiResponse`]; failures keep their kind distinct:
//! 400 for invalid input or payload, 404 for missing documents, 409 for ID or version
//! conflicts, 500 for anything else.

pub mod handlers;
pub mod response;
pub mod server;

// Re-export commonly used items
pub use handlers::SharedService;
pub use response::{ApiError, ApiResponse};
pub use server::{create_app, serve, shutdown_signal, start_server};
