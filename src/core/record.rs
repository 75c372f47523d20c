//! Catalog record type

use crate::core::error::RecordError;
use crate::core::query::Genre;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the app catalog
///
/// Only `App`, `Rating` and `Genres` are interpreted. Every other key of the
/// source object is kept in [`AppRecord::extra`] and written back untouched,
/// so clients see the record exactly as it was loaded.
///
/// # Example
///
/// ```rust,ignore
/// let record: AppRecord = serde_json::from_value(json!({
///     "App": "Solitaire",
///     "Rating": 4.7,
///     "Genres": "Card",
///     "Installs": "10,000,000+"
/// }))?;
///
/// assert!(record.has_genre(Genre::Card));
/// assert_eq!(record.extra["Installs"], "10,000,000+");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Display name
    #[serde(rename = "App")]
    pub app: String,

    /// Store rating in `0.0..=5.0`, `null` for unrated apps
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,

    /// Single genre label or `;`-separated list of labels
    #[serde(rename = "Genres")]
    pub genres: String,

    /// Passthrough fields (Category, Installs, Price, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lowest rating the store hands out
pub const MIN_RATING: f64 = 0.0;

/// Highest rating the store hands out
pub const MAX_RATING: f64 = 5.0;

/// Normalize a string for case-insensitive comparison
///
/// Every case-insensitive match and ordering on app names goes through this
/// function so that search and sort agree with each other.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

impl AppRecord {
    /// Create a record with no passthrough fields
    pub fn new(app: impl Into<String>, rating: Option<f64>, genres: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            rating,
            genres: genres.into(),
            extra: Map::new(),
        }
    }

    /// Whether the `Genres` field mentions `genre`
    ///
    /// Membership is a case-sensitive substring test, so `"Casual;Pretend Play"`
    /// matches [`Genre::Casual`] and `"Adventure;Action & Adventure"` matches
    /// [`Genre::Action`].
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(genre.as_str())
    }

    /// Whether the normalized app name contains an already-normalized needle
    pub fn name_contains(&self, normalized_needle: &str) -> bool {
        normalized_needle.is_empty() || normalize(&self.app).contains(normalized_needle)
    }

    /// Check the record invariants enforced when a catalog is loaded
    pub fn check(&self) -> Result<(), RecordError> {
        if self.app.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }

        if let Some(rating) = self.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(RecordError::RatingOutOfRange(rating));
            }
        }

        Ok(())
    }
}
