//! Column schema — the contract between the engine and its callers.
//!
//! A caller describes its table once: which field path backs each column,
//! which columns are sortable, which participate in free-text search, and
//! how cells render. The view model consults the schema for sort toggling
//! and search paths; the TUI and CLI consult it for headers and widths.

use thiserror::Error;

use crate::path::{FieldPath, PathError};
use crate::record::{FieldValue, Record};

/// Declarative column description supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Stable identifier used for sort toggling and CLI `--sort`.
    pub id: &'static str,
    /// Header label.
    pub label: &'static str,
    /// Dotted path into the record.
    pub path: &'static str,
    pub sortable: bool,
    /// Whether free-text search scans this column.
    pub searchable: bool,
    /// Preferred display width in characters.
    pub width: u16,
    pub format: CellFormat,
}

/// How a resolved value renders into cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// Text as-is; numbers with two decimals.
    Plain,
    /// Dollar amount; sub-dollar prices get six decimals.
    Currency,
    /// Percentage with two decimals.
    Percent,
    /// Percentage with an explicit sign, for PnL-style values.
    SignedPercent,
    /// Integer, truncating decimals.
    Integer,
    /// Risk:reward style `2.8:1`.
    Ratio,
}

/// A column with its path parsed and validated.
#[derive(Debug, Clone)]
pub struct Column {
    spec: ColumnSpec,
    path: FieldPath,
}

#[derive(Debug, Clone)]
pub struct TableSchema {
    columns: Vec<Column>,
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("column {id:?} has an invalid path: {source}")]
    InvalidPath { id: &'static str, source: PathError },
    #[error("duplicate column id {id:?}")]
    DuplicateId { id: &'static str },
}

impl Column {
    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    pub fn id(&self) -> &'static str {
        self.spec.id
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Resolve and render this column's cell for a record. Absent renders
    /// as a dash.
    pub fn render(&self, record: &Record) -> String {
        self.spec.format.render(record.resolve(&self.path))
    }
}

impl TableSchema {
    pub fn new(specs: &[ColumnSpec]) -> Result<Self, SchemaError> {
        let mut columns: Vec<Column> = Vec::with_capacity(specs.len());
        for spec in specs {
            if columns.iter().any(|c| c.id() == spec.id) {
                return Err(SchemaError::DuplicateId { id: spec.id });
            }
            let path = FieldPath::parse(spec.path)
                .map_err(|source| SchemaError::InvalidPath { id: spec.id, source })?;
            columns.push(Column { spec: *spec, path });
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// Paths scanned by free-text search.
    pub fn search_paths(&self) -> Vec<FieldPath> {
        self.columns
            .iter()
            .filter(|c| c.spec.searchable)
            .map(|c| c.path.clone())
            .collect()
    }

    pub fn sortable_ids(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.spec.sortable)
            .map(Column::id)
            .collect()
    }
}

impl CellFormat {
    pub fn render(self, value: FieldValue<'_>) -> String {
        match value {
            FieldValue::Absent => "-".to_string(),
            FieldValue::Bool(b) => if b { "yes" } else { "no" }.to_string(),
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Number(n) => match self {
                CellFormat::Plain => format!("{n:.2}"),
                CellFormat::Currency => {
                    if n.abs() < 1.0 {
                        format!("${n:.6}")
                    } else {
                        format!("${n:.2}")
                    }
                }
                CellFormat::Percent => format!("{n:.2}%"),
                CellFormat::SignedPercent => format!("{n:+.2}%"),
                CellFormat::Integer => format!("{}", n.trunc() as i64),
                CellFormat::Ratio => format!("{n:.1}:1"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_specs() -> Vec<ColumnSpec> {
        vec![
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
                id: "price",
                label: "Price",
                path: "price",
                sortable: true,
                searchable: false,
                width: 12,
                format: CellFormat::Currency,
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
        ]
    }

    #[test]
    fn builds_schema_and_looks_up_columns() {
        let schema = TableSchema::new(&sample_specs()).unwrap();
        assert_eq!(schema.columns().len(), 3);
        assert!(schema.column("price").is_some());
        assert!(schema.column("nope").is_none());
        assert_eq!(schema.sortable_ids(), ["token", "price", "adx"]);
    }

    #[test]
    fn search_paths_cover_only_searchable_columns() {
        let schema = TableSchema::new(&sample_specs()).unwrap();
        let paths = schema.search_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "token");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut specs = sample_specs();
        let first = specs[0];
        specs.push(first);
        assert!(matches!(
            TableSchema::new(&specs),
            Err(SchemaError::DuplicateId { id: "token" })
        ));
    }

    #[test]
    fn rejects_invalid_path() {
        let specs = vec![ColumnSpec {
            id: "broken",
            label: "Broken",
            path: "a..b",
            sortable: false,
            searchable: false,
            width: 4,
            format: CellFormat::Plain,
        }];
        assert!(matches!(
            TableSchema::new(&specs),
            Err(SchemaError::InvalidPath { id: "broken", .. })
        ));
    }

    #[test]
    fn renders_cells_including_absent() {
        let schema = TableSchema::new(&sample_specs()).unwrap();
        let record = Record::new(json!({ "token": "PEPE", "price": 0.000014 })).unwrap();
        assert_eq!(schema.column("token").unwrap().render(&record), "PEPE");
        assert_eq!(schema.column("price").unwrap().render(&record), "$0.000014");
        assert_eq!(schema.column("adx").unwrap().render(&record), "-");
    }

    #[test]
    fn format_variants() {
        assert_eq!(CellFormat::Currency.render(FieldValue::Number(148.23)), "$148.23");
        assert_eq!(CellFormat::Percent.render(FieldValue::Number(91.7)), "91.70%");
        assert_eq!(CellFormat::SignedPercent.render(FieldValue::Number(1.76)), "+1.76%");
        assert_eq!(CellFormat::SignedPercent.render(FieldValue::Number(-4.2)), "-4.20%");
        assert_eq!(CellFormat::Integer.render(FieldValue::Number(96.0)), "96");
        assert_eq!(CellFormat::Ratio.render(FieldValue::Number(2.8)), "2.8:1");
        assert_eq!(CellFormat::Plain.render(FieldValue::Bool(true)), "yes");
    }
}
