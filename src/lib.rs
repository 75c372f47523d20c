//! # Playstore
//!
//! A read-only REST API over a fixed catalog of Google Play app records.
//!
//! ## Features
//!
//! - **Single Query Endpoint**: `GET /apps` with `search`, `sort` and `genres`
//! - **Closed Parameter Domains**: `SortKey` and `Genre` enums, anything else is a `400`
//! - **Pure Query Processor**: filter then stable sort, never mutates the catalog
//! - **Passthrough Records**: unknown dataset fields are served back unchanged
//! - **Configurable**: YAML file plus `PLAYSTORE_*` environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use playstore::prelude::*;
//!
//! let store = InMemoryAppStore::bundled()?;
//!
//! ServerBuilder::new()
//!     .with_store(store)
//!     .serve("127.0.0.1:8000")
//!     .await?;
//! ```
//!
//! Querying without HTTP:
//!
//! ```rust,ignore
//! let params = QueryParams::new("", Some(SortKey::Rating), Some(Genre::Action));
//! let top_action = process(store.list_all(), &params)?;
//! ```

pub mod apps;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AppRecord, CatalogError, FilterPrecedence, Genre, QueryParams, QueryableStore, RecordError,
        SortKey, ValidatedQuery, ValidationError, process, process_with,
    };

    // === Handlers ===
    pub use crate::apps::handlers::{AppState, health_check, list_apps};

    // === Storage ===
    pub use crate::storage::InMemoryAppStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{ServerBuilder, build_app_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Query, State},
        routing::get,
    };
}
