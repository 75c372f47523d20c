//! Typed errors for the catalog service
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a query parameter outside its accepted domain.
//!   Surfaced to clients as `400 Bad Request` with a plain-text message.
//! - [`CatalogError`]: the dataset could not be loaded at startup. Never
//!   reaches a client; the server refuses to start instead.
//! - [`RecordError`]: the reason a single catalog record was rejected.
//!
//! # Example
//!
//! ```rust,ignore
//! match params.validate() {
//!     Ok(query) => println!("sorting by {:?}", query.sort),
//!     Err(ValidationError::InvalidSort { value }) => {
//!         println!("bad sort key: {}", value);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to query parameter validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `sort` is not `App` or `Rating`
    InvalidSort { value: String },

    /// `genres` is not one of the supported labels
    InvalidGenre { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidSort { .. } => write!(f, "Sort must be App or Rating"),
            ValidationError::InvalidGenre { .. } => write!(
                f,
                "Genres must be one of the following: Action, Puzzle, Strategy, Casual, Arcade, or Card."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidSort { .. } => "INVALID_SORT",
            ValidationError::InvalidGenre { .. } => "INVALID_GENRE",
        }
    }

    /// The rejected raw value
    pub fn value(&self) -> &str {
        match self {
            ValidationError::InvalidSort { value } | ValidationError::InvalidGenre { value } => {
                value
            }
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors raised while loading the app catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of records
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record breaks a catalog invariant
    #[error("catalog record {index} is invalid: {reason}")]
    InvalidRecord {
        index: usize,
        #[source]
        reason: RecordError,
    },

    /// The dataset has no records
    #[error("catalog contains no records")]
    Empty,
}

/// Why a single record was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// `App` is empty or whitespace
    #[error("'App' must not be empty")]
    EmptyName,

    /// `Rating` is outside `0.0..=5.0`
    #[error("'Rating' {0} is outside 0..=5")]
    RatingOutOfRange(f64),
}
