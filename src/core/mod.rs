//! Core module containing the catalog types and the query processor

pub mod error;
pub mod processor;
pub mod query;
pub mod record;
pub mod store;

pub use error::{CatalogError, RecordError, ValidationError};
pub use processor::{process, process_with};
pub use query::{FilterPrecedence, Genre, QueryParams, SortKey, ValidatedQuery};
pub use record::AppRecord;
pub use store::QueryableStore;
