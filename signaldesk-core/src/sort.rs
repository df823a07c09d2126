//! Comparator engine — type-aware ordering with deterministic absent placement.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::path::FieldPath;
use crate::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: a field path plus a direction. One sort key at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub path: FieldPath,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(path: FieldPath) -> Self {
        Self {
            path,
            direction: SortDirection::Ascending,
        }
    }
}

/// Order two records under a sort key.
///
/// Within a type, descending negates the ascending result — there is no
/// separate descending code path. Across types (and for absent values) the
/// placement is direction-independent: number < text < bool < absent, so a
/// record missing the field always lands at the bottom.
pub fn compare(a: &Record, b: &Record, key: &SortKey) -> Ordering {
    let va = a.resolve(&key.path);
    let vb = b.resolve(&key.path);

    let (ra, rb) = (type_rank(&va), type_rank(&vb));
    if ra != rb {
        return ra.cmp(&rb);
    }

    let ascending = match (va, vb) {
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(x), FieldValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(&y),
        _ => Ordering::Equal, // both absent
    };

    match key.direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

fn type_rank(value: &FieldValue<'_>) -> u8 {
    match value {
        FieldValue::Number(_) => 0,
        FieldValue::Text(_) => 1,
        FieldValue::Bool(_) => 2,
        FieldValue::Absent => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::new(value).unwrap()
    }

    fn key(raw: &str, direction: SortDirection) -> SortKey {
        SortKey {
            path: FieldPath::parse(raw).unwrap(),
            direction,
        }
    }

    #[test]
    fn numeric_ascending() {
        let a = record(json!({ "confidence": 94 }));
        let b = record(json!({ "confidence": 96 }));
        let k = key("confidence", SortDirection::Ascending);
        assert_eq!(compare(&a, &b, &k), Ordering::Less);
        assert_eq!(compare(&b, &a, &k), Ordering::Greater);
        assert_eq!(compare(&a, &a, &k), Ordering::Equal);
    }

    #[test]
    fn descending_negates_ascending() {
        let a = record(json!({ "confidence": 94 }));
        let b = record(json!({ "confidence": 96 }));
        let asc = key("confidence", SortDirection::Ascending);
        let desc = key("confidence", SortDirection::Descending);
        assert_eq!(compare(&a, &b, &asc), compare(&a, &b, &desc).reverse());
    }

    #[test]
    fn text_compares_case_insensitively() {
        let a = record(json!({ "token": "bonk" }));
        let b = record(json!({ "token": "PEPE" }));
        let k = key("token", SortDirection::Ascending);
        assert_eq!(compare(&a, &b, &k), Ordering::Less);
    }

    #[test]
    fn absent_sorts_last_in_both_directions() {
        let present = record(json!({ "indicators": { "adx": 45.6 } }));
        let missing = record(json!({ "token": "OM" }));
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let k = key("indicators.adx", direction);
            assert_eq!(compare(&present, &missing, &k), Ordering::Less);
            assert_eq!(compare(&missing, &present, &k), Ordering::Greater);
        }
    }

    #[test]
    fn mixed_types_rank_numbers_before_text() {
        // Price fields are sometimes formatted strings; the rank is explicit
        // and direction-independent rather than coerced.
        let numeric = record(json!({ "price": 148.23 }));
        let text = record(json!({ "price": "148.23" }));
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let k = key("price", direction);
            assert_eq!(compare(&numeric, &text, &k), Ordering::Less);
        }
    }

    #[test]
    fn both_absent_are_equal() {
        let a = record(json!({ "token": "A" }));
        let b = record(json!({ "token": "B" }));
        let k = key("indicators.adx", SortDirection::Descending);
        assert_eq!(compare(&a, &b, &k), Ordering::Equal);
    }
}
