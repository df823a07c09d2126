//! Predicate engine — free-text search and AND-combined filter criteria.

use crate::path::FieldPath;
use crate::record::{FieldValue, Record};

/// One filter criterion. Criteria on the same view are combined with AND.
///
/// A record whose path resolves as absent fails any criterion referencing
/// that path — absent never matches as a wildcard.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Resolved text equals the expected value, case-sensitively.
    Equals { path: FieldPath, expected: String },
    /// Resolved number falls within `[min, max)`; `max: None` is unbounded.
    Range {
        path: FieldPath,
        min: f64,
        max: Option<f64>,
    },
    /// Resolved text contains the needle, case-insensitively.
    Contains { path: FieldPath, needle: String },
}

impl Criterion {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Criterion::Equals { path, expected } => match record.resolve(path) {
                FieldValue::Text(actual) => actual == expected,
                _ => false,
            },
            Criterion::Range { path, min, max } => match record.resolve(path) {
                FieldValue::Number(n) => n >= *min && max.map_or(true, |m| n < m),
                _ => false,
            },
            Criterion::Contains { path, needle } => match record.resolve(path) {
                FieldValue::Text(actual) => {
                    actual.to_lowercase().contains(&needle.to_lowercase())
                }
                _ => false,
            },
        }
    }
}

/// Case-insensitive substring search over the configured text fields.
/// An empty search string matches every record; a record matches when ANY
/// searchable field contains the text.
pub fn matches_search(record: &Record, search: &str, search_paths: &[FieldPath]) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    search_paths.iter().any(|path| {
        record
            .resolve(path)
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::new(value).unwrap()
    }

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn equals_is_case_sensitive() {
        let row = record(json!({ "status": "active" }));
        let hit = Criterion::Equals { path: path("status"), expected: "active".into() };
        let miss = Criterion::Equals { path: path("status"), expected: "Active".into() };
        assert!(hit.matches(&row));
        assert!(!miss.matches(&row));
    }

    #[test]
    fn equals_fails_on_non_text() {
        let row = record(json!({ "confidence": 96 }));
        let criterion = Criterion::Equals { path: path("confidence"), expected: "96".into() };
        assert!(!criterion.matches(&row));
    }

    #[test]
    fn range_is_half_open() {
        let criterion = Criterion::Range { path: path("confidence"), min: 80.0, max: Some(90.0) };
        assert!(criterion.matches(&record(json!({ "confidence": 80 }))));
        assert!(criterion.matches(&record(json!({ "confidence": 89.9 }))));
        assert!(!criterion.matches(&record(json!({ "confidence": 90 }))));
        assert!(!criterion.matches(&record(json!({ "confidence": 79.9 }))));
    }

    #[test]
    fn range_without_max_is_unbounded() {
        let criterion = Criterion::Range { path: path("confidence"), min: 95.0, max: None };
        assert!(criterion.matches(&record(json!({ "confidence": 96 }))));
        assert!(criterion.matches(&record(json!({ "confidence": 10_000 }))));
        assert!(!criterion.matches(&record(json!({ "confidence": 94 }))));
    }

    #[test]
    fn absent_field_never_matches() {
        let row = record(json!({ "token": "OM" }));
        let range = Criterion::Range { path: path("indicators.adx"), min: 0.0, max: None };
        let equals = Criterion::Equals { path: path("status"), expected: "active".into() };
        assert!(!range.matches(&row));
        assert!(!equals.matches(&row));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let row = record(json!({ "setup_type": "Channel Bounce" }));
        let criterion = Criterion::Contains { path: path("setup_type"), needle: "BOUNCE".into() };
        assert!(criterion.matches(&row));
    }

    #[test]
    fn search_empty_matches_all() {
        let row = record(json!({ "token": "SOL" }));
        assert!(matches_search(&row, "", &[path("token")]));
    }

    #[test]
    fn search_any_field_hit_is_enough() {
        let row = record(json!({ "token": "PEPE", "token_name": "Pepe" }));
        let paths = [path("token"), path("token_name"), path("setup_type")];
        assert!(matches_search(&row, "pep", &paths));
        assert!(!matches_search(&row, "sol", &paths));
    }

    #[test]
    fn search_skips_non_text_fields() {
        let row = record(json!({ "token": "SOL", "confidence": 96 }));
        let paths = [path("confidence"), path("token")];
        assert!(matches_search(&row, "sol", &paths));
        assert!(!matches_search(&row, "96", &paths));
    }
}
