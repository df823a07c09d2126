//! Table view model — search/filter/sort state over an externally owned
//! record list.
//!
//! The view owns no data. `apply` recomputes the visible sequence from the
//! full input list every time: filter first, then a stable sort if a sort
//! key is set. There is no incremental path — clearing a criterion always
//! restores the rows it alone excluded.

use crate::filter::{matches_search, Criterion};
use crate::path::FieldPath;
use crate::record::Record;
use crate::schema::TableSchema;
use crate::sort::{compare, SortDirection, SortKey};

#[derive(Debug, Clone)]
pub struct TableView {
    schema: TableSchema,
    search_paths: Vec<FieldPath>,
    search: String,
    criteria: Vec<(String, Criterion)>,
    sort: Option<SortKey>,
}

impl TableView {
    pub fn new(schema: TableSchema) -> Self {
        let search_paths = schema.search_paths();
        Self {
            schema,
            search_paths,
            search: String::new(),
            criteria: Vec::new(),
            sort: None,
        }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Install or replace the criterion stored under `key`.
    pub fn set_criterion(&mut self, key: impl Into<String>, criterion: Criterion) {
        let key = key.into();
        if let Some(slot) = self.criteria.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = criterion;
        } else {
            self.criteria.push((key, criterion));
        }
    }

    pub fn remove_criterion(&mut self, key: &str) {
        self.criteria.retain(|(k, _)| k != key);
    }

    pub fn clear_criteria(&mut self) {
        self.criteria.clear();
    }

    pub fn criteria_len(&self) -> usize {
        self.criteria.len()
    }

    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// Sort by the given column: toggling the already-active column flips
    /// direction, a new column starts ascending. Returns false (and leaves
    /// the sort untouched) for unknown or unsortable columns.
    pub fn toggle_sort(&mut self, column_id: &str) -> bool {
        let Some(column) = self.schema.column(column_id) else {
            return false;
        };
        if !column.spec().sortable {
            return false;
        }
        let path = column.path().clone();
        self.sort = match self.sort.take() {
            Some(key) if key.path == path => Some(SortKey {
                path,
                direction: key.direction.flipped(),
            }),
            _ => Some(SortKey::ascending(path)),
        };
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Direction of the active sort if it is on `column_id`.
    pub fn sort_direction_for(&self, column_id: &str) -> Option<SortDirection> {
        let column = self.schema.column(column_id)?;
        let key = self.sort.as_ref()?;
        (key.path == *column.path()).then_some(key.direction)
    }

    /// Reset search, criteria, and sort in one step.
    pub fn reset(&mut self) {
        self.clear_search();
        self.clear_criteria();
        self.clear_sort();
    }

    /// Recompute the visible sequence. Filtering precedes sorting; with no
    /// sort key the input order is preserved. The input list is never
    /// mutated and nothing is cached between calls.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let mut visible: Vec<&Record> = records
            .iter()
            .filter(|record| self.matches(record))
            .collect();
        if let Some(key) = &self.sort {
            // Vec::sort_by is stable: ties keep their input order.
            visible.sort_by(|a, b| compare(a, b, key));
        }
        visible
    }

    fn matches(&self, record: &Record) -> bool {
        matches_search(record, &self.search, &self.search_paths)
            && self.criteria.iter().all(|(_, c)| c.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CellFormat, ColumnSpec};
    use serde_json::json;

    fn schema() -> TableSchema {
        TableSchema::new(&[
            ColumnSpec {
                id: "token",
                label: "Token",
                path: "token",
                sortable: true,
                searchable: true,
                width: 8,
                format: CellFormat::Plain,
            },
            ColumnSpec {
                id: "confidence",
                label: "Conf%",
                path: "confidence",
                sortable: true,
                searchable: false,
                width: 6,
                format: CellFormat::Integer,
            },
            ColumnSpec {
                id: "status",
                label: "Status",
                path: "status",
                sortable: false,
                searchable: false,
                width: 10,
                format: CellFormat::Plain,
            },
        ])
        .unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(json!({ "token": "SOL", "confidence": 96, "status": "active" })).unwrap(),
            Record::new(json!({ "token": "PEPE", "confidence": 94, "status": "priority" })).unwrap(),
            Record::new(json!({ "token": "UNI", "confidence": 94, "status": "fresh" })).unwrap(),
        ]
    }

    fn tokens<'a>(visible: &[&'a Record]) -> Vec<&'a str> {
        visible
            .iter()
            .map(|r| r.as_value()["token"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn identity_with_no_state() {
        let view = TableView::new(schema());
        let rows = records();
        assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE", "UNI"]);
    }

    #[test]
    fn descending_sort_is_stable_on_ties() {
        let mut view = TableView::new(schema());
        view.toggle_sort("confidence"); // ascending
        view.toggle_sort("confidence"); // descending
        let rows = records();
        // PEPE and UNI tie at 94 and must keep input order.
        assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE", "UNI"]);
    }

    #[test]
    fn toggle_is_two_state() {
        let mut view = TableView::new(schema());
        view.toggle_sort("confidence");
        assert_eq!(
            view.sort_direction_for("confidence"),
            Some(SortDirection::Ascending)
        );
        view.toggle_sort("confidence");
        assert_eq!(
            view.sort_direction_for("confidence"),
            Some(SortDirection::Descending)
        );
        view.toggle_sort("confidence");
        assert_eq!(
            view.sort_direction_for("confidence"),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut view = TableView::new(schema());
        view.toggle_sort("confidence");
        view.toggle_sort("confidence"); // descending
        view.toggle_sort("token"); // new column
        assert_eq!(
            view.sort_direction_for("token"),
            Some(SortDirection::Ascending)
        );
        assert_eq!(view.sort_direction_for("confidence"), None);
    }

    #[test]
    fn unsortable_and_unknown_columns_are_rejected() {
        let mut view = TableView::new(schema());
        assert!(!view.toggle_sort("status"));
        assert!(!view.toggle_sort("missing"));
        assert!(view.sort_key().is_none());
    }

    #[test]
    fn search_filters_rows() {
        let mut view = TableView::new(schema());
        view.set_search("pep");
        let rows = records();
        assert_eq!(tokens(&view.apply(&rows)), ["PEPE"]);
    }

    #[test]
    fn removing_criterion_restores_rows() {
        let mut view = TableView::new(schema());
        view.set_criterion(
            "confidence",
            Criterion::Range {
                path: FieldPath::parse("confidence").unwrap(),
                min: 95.0,
                max: None,
            },
        );
        let rows = records();
        assert_eq!(tokens(&view.apply(&rows)), ["SOL"]);

        view.remove_criterion("confidence");
        assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE", "UNI"]);
    }

    #[test]
    fn set_criterion_replaces_same_key() {
        let mut view = TableView::new(schema());
        let path = FieldPath::parse("status").unwrap();
        view.set_criterion(
            "status",
            Criterion::Equals { path: path.clone(), expected: "active".into() },
        );
        view.set_criterion(
            "status",
            Criterion::Equals { path, expected: "fresh".into() },
        );
        assert_eq!(view.criteria_len(), 1);
        let rows = records();
        assert_eq!(tokens(&view.apply(&rows)), ["UNI"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let mut view = TableView::new(schema());
        view.set_criterion(
            "status",
            Criterion::Equals {
                path: FieldPath::parse("status").unwrap(),
                expected: "priority".into(),
            },
        );
        view.set_criterion(
            "confidence",
            Criterion::Range {
                path: FieldPath::parse("confidence").unwrap(),
                min: 95.0,
                max: None,
            },
        );
        let rows = records();
        assert!(view.apply(&rows).is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut view = TableView::new(schema());
        view.set_search("pep");
        view.toggle_sort("token");
        view.set_criterion(
            "confidence",
            Criterion::Range {
                path: FieldPath::parse("confidence").unwrap(),
                min: 95.0,
                max: None,
            },
        );
        view.reset();
        let rows = records();
        assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE", "UNI"]);
        assert!(view.sort_key().is_none());
        assert_eq!(view.criteria_len(), 0);
    }
}
