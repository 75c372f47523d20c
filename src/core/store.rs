//! Store trait for the read-only app catalog

use crate::core::error::ValidationError;
use crate::core::processor;
use crate::core::query::{FilterPrecedence, QueryParams};
use crate::core::record::AppRecord;

/// Trait for catalogs that can answer `/apps` queries
///
/// Implementors only expose their records. Filtering and sorting are shared
/// and never touch the underlying collection, so a store can be queried from
/// any number of requests at once without locking.
pub trait QueryableStore: Send + Sync {
    /// Get all records (unfiltered, in catalog order)
    fn list_all(&self) -> &[AppRecord];

    /// Number of records in the catalog
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Whether the catalog has no records
    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }

    /// Validate `params` and return the matching records
    fn query(
        &self,
        params: &QueryParams,
        precedence: FilterPrecedence,
    ) -> Result<Vec<AppRecord>, ValidationError> {
        processor::process_with(self.list_all(), params, precedence)
    }
}
