//! SignalDesk Core — the tabular explorer engine.
//!
//! Every table in the command center (TUI panels, CLI listings) goes through
//! the same pipeline:
//! - Records: schema-less nested key/value rows
//! - Field paths: dotted addresses resolved without panicking
//! - Predicates: free-text search plus AND-combined filter criteria
//! - Comparators: type-aware ordering with deterministic absent placement
//! - View model: search/filter/sort state and the visible row sequence

pub mod filter;
pub mod path;
pub mod record;
pub mod schema;
pub mod sort;
pub mod view;

pub use filter::Criterion;
pub use path::FieldPath;
pub use record::{to_records, FieldValue, Record, RecordError};
pub use schema::{CellFormat, Column, ColumnSpec, TableSchema};
pub use sort::{SortDirection, SortKey};
pub use view::TableView;
