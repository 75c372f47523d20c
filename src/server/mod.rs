//! Server module for building the catalog HTTP server
//!
//! This module provides a `ServerBuilder` that wires the catalog store and
//! configuration into an Axum router, adds the request tracing and CORS
//! layers, and serves it with graceful shutdown.

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_app_routes;
