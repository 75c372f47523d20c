//! Query parameters for the `/apps` listing

use crate::core::error::ValidationError;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw query parameters, as found in the URL
///
/// All values arrive as free-form strings and are turned into the closed
/// [`SortKey`] and [`Genre`] domains by [`QueryParams::validate`].
///
/// A repeated key does not fail extraction: its values are joined with `,`
/// (`?sort=App&sort=Rating` reads as `"App,Rating"`), which then fails
/// validation like any other unsupported value.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_apps(
///     Query(params): Query<QueryParams>,
/// ) -> Result<Json<Vec<AppRecord>>, ValidationError> {
///     let query = params.validate()?;
///     // ...
/// }
///
/// // Usage:
/// GET /apps?search=hello
/// GET /apps?genres=Action&sort=Rating
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Case-insensitive substring of the app name (empty matches all)
    pub search: String,

    /// `App` or `Rating`
    pub sort: Option<String>,

    /// One of the supported genre labels
    pub genres: Option<String>,
}

impl QueryParams {
    /// Build params from already-typed values
    pub fn new(search: impl Into<String>, sort: Option<SortKey>, genre: Option<Genre>) -> Self {
        Self {
            search: search.into(),
            sort: sort.map(|s| s.as_str().to_string()),
            genres: genre.map(|g| g.as_str().to_string()),
        }
    }

    /// Validate the raw values
    ///
    /// `sort` is checked before `genres`, so a request with both values wrong
    /// reports the sort error. Empty strings count as absent.
    pub fn validate(&self) -> Result<ValidatedQuery, ValidationError> {
        let sort = non_empty(&self.sort).map(str::parse::<SortKey>).transpose()?;
        let genre = non_empty(&self.genres).map(str::parse::<Genre>).transpose()?;

        Ok(ValidatedQuery {
            search: self.search.clone(),
            sort,
            genre,
        })
    }
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(QueryParamsVisitor)
    }
}

struct QueryParamsVisitor;

impl<'de> Visitor<'de> for QueryParamsVisitor {
    type Value = QueryParams;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("query string parameters")
    }

    fn visit_map<A>(self, mut map: A) -> Result<QueryParams, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut search: Option<String> = None;
        let mut sort: Option<String> = None;
        let mut genres: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "search" => append_value(&mut search, map.next_value()?),
                "sort" => append_value(&mut sort, map.next_value()?),
                "genres" => append_value(&mut genres, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(QueryParams {
            search: search.unwrap_or_default(),
            sort,
            genres,
        })
    }
}

fn append_value(slot: &mut Option<String>, value: String) {
    match slot {
        Some(existing) => {
            existing.push(',');
            existing.push_str(&value);
        }
        None => *slot = Some(value),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Query parameters after validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatedQuery {
    pub search: String,
    pub sort: Option<SortKey>,
    pub genre: Option<Genre>,
}

/// Field the result list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Ascending by case-insensitive app name
    App,
    /// Descending by rating, unrated apps last
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::App => "App",
            SortKey::Rating => "Rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "App" => Ok(SortKey::App),
            "Rating" => Ok(SortKey::Rating),
            other => Err(ValidationError::InvalidSort {
                value: other.to_string(),
            }),
        }
    }
}

/// Genre labels accepted by the `genres` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Puzzle,
    Strategy,
    Casual,
    Arcade,
    Card,
}

impl Genre {
    /// Every accepted genre, in the order used by error messages
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Puzzle,
        Genre::Strategy,
        Genre::Casual,
        Genre::Arcade,
        Genre::Card,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Puzzle => "Puzzle",
            Genre::Strategy => "Strategy",
            Genre::Casual => "Casual",
            Genre::Arcade => "Arcade",
            Genre::Card => "Card",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidGenre {
                value: s.to_string(),
            })
    }
}

/// How the `search` and `genres` filters combine when both are given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPrecedence {
    /// The genre filter replaces the name search
    #[default]
    GenreOverridesSearch,
    /// Both filters apply
    Intersect,
}

impl FromStr for FilterPrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre_overrides_search" => Ok(FilterPrecedence::GenreOverridesSearch),
            "intersect" => Ok(FilterPrecedence::Intersect),
            other => Err(format!(
                "unknown filter precedence '{}', expected genre_overrides_search or intersect",
                other
            )),
        }
    }
}
