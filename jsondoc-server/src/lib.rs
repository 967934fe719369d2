//! # jsondoc server
//!
//! HTTP transport for the jsondoc document service, together with the configuration
//! and logging setup used by the `jsondoc-server` binary.

/// HTTP API handlers and routing
pub mod api;

/// Configuration loading
pub mod config;

/// Tracing subscriber setup
pub mod logging;
