//! The `/apps` query: filter then sort
//!
//! Everything here is a pure function of its inputs. The catalog slice is
//! only read; results are fresh clones in a new `Vec`.

use crate::core::error::ValidationError;
use crate::core::query::{FilterPrecedence, QueryParams, SortKey, ValidatedQuery};
use crate::core::record::{AppRecord, normalize};
use std::cmp::Ordering;

/// Validate `params` and run the query with the default filter precedence
pub fn process(
    records: &[AppRecord],
    params: &QueryParams,
) -> Result<Vec<AppRecord>, ValidationError> {
    process_with(records, params, FilterPrecedence::default())
}

/// Validate `params` and run the query
pub fn process_with(
    records: &[AppRecord],
    params: &QueryParams,
    precedence: FilterPrecedence,
) -> Result<Vec<AppRecord>, ValidationError> {
    let query = params.validate()?;
    Ok(run(records, &query, precedence))
}

/// Run an already validated query
pub fn run(
    records: &[AppRecord],
    query: &ValidatedQuery,
    precedence: FilterPrecedence,
) -> Vec<AppRecord> {
    let needle = normalize(&query.search);

    let mut results: Vec<AppRecord> = match (query.genre, precedence) {
        (Some(genre), FilterPrecedence::GenreOverridesSearch) => records
            .iter()
            .filter(|r| r.has_genre(genre))
            .cloned()
            .collect(),
        (Some(genre), FilterPrecedence::Intersect) => records
            .iter()
            .filter(|r| r.has_genre(genre) && r.name_contains(&needle))
            .cloned()
            .collect(),
        (None, _) => records
            .iter()
            .filter(|r| r.name_contains(&needle))
            .cloned()
            .collect(),
    };

    if let Some(key) = query.sort {
        sort_records(&mut results, key);
    }

    results
}

/// Stable in-place sort by `key`
pub fn sort_records(records: &mut [AppRecord], key: SortKey) {
    match key {
        SortKey::App => records.sort_by_cached_key(|r| normalize(&r.app)),
        SortKey::Rating => records.sort_by(|a, b| rating_descending(a.rating, b.rating)),
    }
}

// Highest first; unrated after every rated record.
fn rating_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Genre;

    fn catalog() -> Vec<AppRecord> {
        vec![
            AppRecord::new("Subway Surfers", Some(4.5), "Arcade"),
            AppRecord::new("slither.io", Some(4.1), "Action"),
            AppRecord::new("Hello Kitty Nail Salon", Some(4.2), "Casual;Pretend Play"),
            AppRecord::new("PUBG MOBILE", Some(4.4), "Action"),
            AppRecord::new("Unrated Action", None, "Action"),
            AppRecord::new("Hello Action Hero", Some(3.9), "Action"),
            AppRecord::new("Angry Birds Classic", Some(4.4), "Arcade"),
        ]
    }

    fn names(records: &[AppRecord]) -> Vec<&str> {
        records.iter().map(|r| r.app.as_str()).collect()
    }

    fn params(search: &str, sort: Option<&str>, genres: Option<&str>) -> QueryParams {
        QueryParams {
            search: search.to_string(),
            sort: sort.map(str::to_string),
            genres: genres.map(str::to_string),
        }
    }

    #[test]
    fn test_no_params_returns_everything_in_order() {
        let records = catalog();
        let result = process(&records, &QueryParams::default()).unwrap();
        assert_eq!(result, records);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let result = process(&catalog(), &params("hello", None, None)).unwrap();
        assert_eq!(
            names(&result),
            vec!["Hello Kitty Nail Salon", "Hello Action Hero"]
        );

        let result = process(&catalog(), &params("PUBG mobile", None, None)).unwrap();
        assert_eq!(names(&result), vec!["PUBG MOBILE"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let result = process(&catalog(), &params("zzz", None, None)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_genre_filter() {
        let result = process(&catalog(), &params("", None, Some("Action"))).unwrap();
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|r| r.genres.contains("Action")));
    }

    #[test]
    fn test_genre_overrides_search_by_default() {
        let result = process(&catalog(), &params("hello", None, Some("Action"))).unwrap();
        assert_eq!(
            names(&result),
            vec![
                "slither.io",
                "PUBG MOBILE",
                "Unrated Action",
                "Hello Action Hero"
            ]
        );
    }

    #[test]
    fn test_intersect_combines_filters() {
        let result = process_with(
            &catalog(),
            &params("hello", None, Some("Action")),
            FilterPrecedence::Intersect,
        )
        .unwrap();
        assert_eq!(names(&result), vec!["Hello Action Hero"]);
    }

    #[test]
    fn test_sort_by_app_ignores_case() {
        let result = process(&catalog(), &params("", Some("App"), None)).unwrap();
        assert_eq!(
            names(&result),
            vec![
                "Angry Birds Classic",
                "Hello Action Hero",
                "Hello Kitty Nail Salon",
                "PUBG MOBILE",
                "slither.io",
                "Subway Surfers",
                "Unrated Action",
            ]
        );
    }

    #[test]
    fn test_sort_by_rating_descending_and_stable() {
        let result = process(&catalog(), &params("", Some("Rating"), None)).unwrap();
        assert_eq!(
            names(&result),
            vec![
                "Subway Surfers",
                // 4.4 tie keeps catalog order
                "PUBG MOBILE",
                "Angry Birds Classic",
                "Hello Kitty Nail Salon",
                "slither.io",
                "Hello Action Hero",
                "Unrated Action",
            ]
        );
    }

    #[test]
    fn test_genre_and_sort() {
        let result = process(&catalog(), &params("", Some("Rating"), Some("Action"))).unwrap();
        assert_eq!(
            names(&result),
            vec![
                "PUBG MOBILE",
                "slither.io",
                "Hello Action Hero",
                "Unrated Action"
            ]
        );
    }

    #[test]
    fn test_invalid_params() {
        assert_eq!(
            process(&catalog(), &params("", Some("INCORRECT"), None)),
            Err(ValidationError::InvalidSort {
                value: "INCORRECT".to_string()
            })
        );
        assert_eq!(
            process(&catalog(), &params("", None, Some("INCORRECT"))),
            Err(ValidationError::InvalidGenre {
                value: "INCORRECT".to_string()
            })
        );
    }

    #[test]
    fn test_input_is_not_mutated_and_query_is_idempotent() {
        let records = catalog();
        let snapshot = records.clone();
        let query = ValidatedQuery {
            search: String::new(),
            sort: Some(SortKey::App),
            genre: Some(Genre::Action),
        };

        let first = run(&records, &query, FilterPrecedence::default());
        let second = run(&records, &query, FilterPrecedence::default());

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }
}
