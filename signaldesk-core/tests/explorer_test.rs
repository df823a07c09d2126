//! End-to-end tests for the explorer pipeline: schema → view → visible rows.

use serde_json::json;
use signaldesk_core::{
    CellFormat, ColumnSpec, Criterion, FieldPath, Record, SortDirection, TableSchema, TableView,
};

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
            id: "name",
            label: "Name",
            path: "token_name",
            sortable: true,
            searchable: true,
            width: 12,
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
            id: "adx",
            label: "ADX",
            path: "indicators.adx",
            sortable: true,
            searchable: false,
            width: 6,
            format: CellFormat::Plain,
        },
    ])
    .unwrap()
}

fn rows() -> Vec<Record> {
    vec![
        Record::new(json!({
            "token": "SOL",
            "token_name": "Solana",
            "confidence": 96,
            "indicators": { "adx": 45.6 },
        }))
        .unwrap(),
        Record::new(json!({
            "token": "PEPE",
            "token_name": "Pepe",
            "confidence": 94,
            "indicators": { "adx": 67.8 },
        }))
        .unwrap(),
        Record::new(json!({
            "token": "UNI",
            "token_name": "Uniswap",
            "confidence": 94,
        }))
        .unwrap(),
    ]
}

fn tokens<'a>(visible: &[&'a Record]) -> Vec<&'a str> {
    visible
        .iter()
        .map(|r| r.as_value()["token"].as_str().unwrap())
        .collect()
}

#[test]
fn confidence_descending_keeps_tied_rows_in_input_order() {
    let mut view = TableView::new(schema());
    view.toggle_sort("confidence");
    view.toggle_sort("confidence");
    let rows = rows();
    // PEPE(94) stays ahead of UNI(94): the sort is stable.
    assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE", "UNI"]);
}

#[test]
fn case_insensitive_search_over_searchable_columns() {
    let mut view = TableView::new(schema());
    view.set_search("pep");
    let rows = rows();
    assert_eq!(tokens(&view.apply(&rows)), ["PEPE"]);

    // Name column is searchable too.
    view.set_search("SWAP");
    assert_eq!(tokens(&view.apply(&rows)), ["UNI"]);
}

#[test]
fn range_filter_with_unbounded_max() {
    let mut view = TableView::new(schema());
    view.set_criterion(
        "confidence",
        Criterion::Range {
            path: FieldPath::parse("confidence").unwrap(),
            min: 95.0,
            max: None,
        },
    );
    let rows = rows();
    assert_eq!(tokens(&view.apply(&rows)), ["SOL"]);
}

#[test]
fn record_missing_nested_object_fails_filter_and_sorts_last() {
    let rows = rows();

    // UNI has no indicators block: excluded by any filter on that path.
    let mut view = TableView::new(schema());
    view.set_criterion(
        "adx",
        Criterion::Range {
            path: FieldPath::parse("indicators.adx").unwrap(),
            min: 0.0,
            max: None,
        },
    );
    assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE"]);

    // And it sorts after present values in both directions.
    let mut view = TableView::new(schema());
    view.toggle_sort("adx");
    assert_eq!(tokens(&view.apply(&rows)), ["SOL", "PEPE", "UNI"]);
    view.toggle_sort("adx");
    assert_eq!(tokens(&view.apply(&rows)), ["PEPE", "SOL", "UNI"]);
}

#[test]
fn filtering_precedes_sorting_without_changing_membership() {
    let rows = rows();

    let mut filtered_then_sorted = TableView::new(schema());
    filtered_then_sorted.set_criterion(
        "confidence",
        Criterion::Range {
            path: FieldPath::parse("confidence").unwrap(),
            min: 94.0,
            max: Some(95.0),
        },
    );
    filtered_then_sorted.toggle_sort("token");
    let visible = filtered_then_sorted.apply(&rows);
    assert_eq!(tokens(&visible), ["PEPE", "UNI"]);

    // Sorting a pre-filtered list yields the same sequence.
    let prefiltered: Vec<Record> = rows
        .iter()
        .filter(|r| r.as_value()["confidence"] == json!(94))
        .cloned()
        .collect();
    let mut sort_only = TableView::new(schema());
    sort_only.toggle_sort("token");
    assert_eq!(tokens(&sort_only.apply(&prefiltered)), ["PEPE", "UNI"]);
}

#[test]
fn clearing_search_restores_excluded_rows() {
    let mut view = TableView::new(schema());
    let rows = rows();
    view.set_search("pepe");
    assert_eq!(view.apply(&rows).len(), 1);
    view.clear_search();
    assert_eq!(view.apply(&rows).len(), 3);
}

#[test]
fn new_dataset_reference_is_recomputed_from_scratch() {
    let mut view = TableView::new(schema());
    view.toggle_sort("confidence");
    let first = rows();
    assert_eq!(view.apply(&first).len(), 3);

    // A wholly new list goes through the same pipeline; nothing is retained
    // from the previous dataset.
    let second = vec![Record::new(json!({
        "token": "OM",
        "token_name": "Mantra",
        "confidence": 71,
    }))
    .unwrap()];
    assert_eq!(tokens(&view.apply(&second)), ["OM"]);
}

#[test]
fn sort_direction_indicator_tracks_active_column() {
    let mut view = TableView::new(schema());
    view.toggle_sort("adx");
    assert_eq!(view.sort_direction_for("adx"), Some(SortDirection::Ascending));
    assert_eq!(view.sort_direction_for("token"), None);
}
