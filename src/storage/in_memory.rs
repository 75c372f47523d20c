//! In-memory implementation of QueryableStore

use crate::core::{AppRecord, CatalogError, QueryableStore};
use std::path::Path;
use std::sync::Arc;

/// Catalog shipped with the crate
const BUNDLED_CATALOG: &str = include_str!("../../data/google-play-apps.json");

/// In-memory app catalog
///
/// Records are held in an `Arc<[AppRecord]>`: cloning the store is cheap and
/// every clone sees the same immutable data.
#[derive(Debug, Clone)]
pub struct InMemoryAppStore {
    records: Arc<[AppRecord]>,
}

impl InMemoryAppStore {
    /// Build a store from records, checking every record
    pub fn from_records(records: Vec<AppRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            record
                .check()
                .map_err(|reason| CatalogError::InvalidRecord { index, reason })?;
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<AppRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a JSON array of records from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// The catalog bundled with the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }
}

impl QueryableStore for InMemoryAppStore {
    fn list_all(&self) -> &[AppRecord] {
        &self.records
    }
}
