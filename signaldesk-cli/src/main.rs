//! SignalDesk CLI — filter, sort, and print the desk catalog.
//!
//! Commands:
//! - `setups` — query the setup board (search, status, confidence, sort)
//! - `scanner` — query the heat table (minimum heat, sort)
//! - `baskets` — list holdings of the long or short basket
//! - `columns` — show the column ids each table accepts for `--sort`

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use signaldesk_core::{Criterion, FieldPath, Record, TableSchema, TableView};
use signaldesk_data::baskets;
use signaldesk_data::scanner;
use signaldesk_data::setups::{self, SetupStatus};

#[derive(Parser)]
#[command(name = "signaldesk-cli", about = "SignalDesk CLI — query the desk catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the active setup board.
    Setups {
        /// Case-insensitive substring over token, name, and setup type.
        #[arg(long)]
        search: Option<String>,

        /// Exact status: active, priority, approaching, triggered, fresh.
        #[arg(long)]
        status: Option<String>,

        /// Keep rows with confidence >= this value.
        #[arg(long)]
        min_confidence: Option<f64>,

        /// Keep rows with confidence < this value.
        #[arg(long)]
        max_confidence: Option<f64>,

        /// Column id to sort by (see `columns`).
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Emit JSON instead of an aligned table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Query the scanner heat table.
    Scanner {
        /// Keep rows with heat score >= this value.
        #[arg(long)]
        min_heat: Option<f64>,

        /// Column id to sort by (see `columns`).
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Emit JSON instead of an aligned table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List holdings of a cycle basket.
    Baskets {
        /// Which basket to list.
        #[arg(long, value_enum, default_value = "long")]
        cycle: CycleArg,

        /// Column id to sort by (see `columns`).
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Emit JSON instead of an aligned table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the sortable column ids for each table.
    Columns,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CycleArg {
    Long,
    Short,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Setups {
            search,
            status,
            min_confidence,
            max_confidence,
            sort,
            desc,
            json,
        } => {
            let records = setups::setup_records()?;
            let schema = TableSchema::new(&setups::setup_columns())?;
            let mut view = TableView::new(schema);

            if let Some(text) = search {
                view.set_search(text);
            }
            if let Some(status) = status {
                if !SetupStatus::ALL.iter().any(|s| s.as_str() == status) {
                    bail!(
                        "unknown status {status:?}; expected one of: {}",
                        SetupStatus::ALL.map(SetupStatus::as_str).join(", ")
                    );
                }
                view.set_criterion(
                    "status",
                    Criterion::Equals {
                        path: FieldPath::parse("status")?,
                        expected: status,
                    },
                );
            }
            if min_confidence.is_some() || max_confidence.is_some() {
                view.set_criterion(
                    "confidence",
                    Criterion::Range {
                        path: FieldPath::parse("confidence")?,
                        min: min_confidence.unwrap_or(0.0),
                        max: max_confidence,
                    },
                );
            }
            apply_sort(&mut view, sort.as_deref(), desc)?;
            print_result(&view, &records, json)
        }
        Commands::Scanner { min_heat, sort, desc, json } => {
            let records = scanner::scanner_records()?;
            let schema = TableSchema::new(&scanner::scanner_columns())?;
            let mut view = TableView::new(schema);

            if let Some(min) = min_heat {
                view.set_criterion(
                    "heat",
                    Criterion::Range {
                        path: FieldPath::parse("heat_score")?,
                        min,
                        max: None,
                    },
                );
            }
            apply_sort(&mut view, sort.as_deref(), desc)?;
            print_result(&view, &records, json)
        }
        Commands::Baskets { cycle, sort, desc, json } => {
            let basket = match cycle {
                CycleArg::Long => baskets::long_basket(),
                CycleArg::Short => baskets::short_basket(),
            };
            let records = baskets::holding_records(&basket)?;
            let schema = TableSchema::new(&baskets::holding_columns())?;
            let mut view = TableView::new(schema);
            apply_sort(&mut view, sort.as_deref(), desc)?;
            print_result(&view, &records, json)
        }
        Commands::Columns => {
            print_columns("setups", &TableSchema::new(&setups::setup_columns())?);
            print_columns("scanner", &TableSchema::new(&scanner::scanner_columns())?);
            print_columns("baskets", &TableSchema::new(&baskets::holding_columns())?);
            Ok(())
        }
    }
}

/// Install the sort key: ascending by default, toggled again for descending.
fn apply_sort(view: &mut TableView, sort: Option<&str>, desc: bool) -> Result<()> {
    let Some(id) = sort else {
        return Ok(());
    };
    if !view.toggle_sort(id) {
        bail!(
            "unknown or unsortable column {id:?}; sortable columns: {}",
            view.schema().sortable_ids().join(", ")
        );
    }
    if desc {
        view.toggle_sort(id);
    }
    Ok(())
}

fn print_result(view: &TableView, records: &[Record], json: bool) -> Result<()> {
    let visible = view.apply(records);
    if json {
        let values: Vec<&serde_json::Value> = visible.iter().map(|r| r.as_value()).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    let columns = view.schema().columns();

    // Header
    let header: Vec<String> = columns
        .iter()
        .map(|c| format!("{:<width$}", c.spec().label, width = c.spec().width as usize))
        .collect();
    println!("{}", header.join(" "));

    // Rows
    for record in &visible {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| {
                let mut text = c.render(record);
                let width = c.spec().width as usize;
                if text.chars().count() > width {
                    text = text.chars().take(width).collect();
                }
                format!("{text:<width$}")
            })
            .collect();
        println!("{}", cells.join(" "));
    }

    println!("{} of {} rows", visible.len(), records.len());
    Ok(())
}

fn print_columns(table: &str, schema: &TableSchema) {
    println!("{table}: {}", schema.sortable_ids().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sort_rejects_unknown_columns() {
        let schema = TableSchema::new(&setups::setup_columns()).unwrap();
        let mut view = TableView::new(schema);
        assert!(apply_sort(&mut view, Some("nope"), false).is_err());
        assert!(apply_sort(&mut view, Some("conf"), true).is_ok());
    }

    #[test]
    fn desc_flag_flips_direction() {
        use signaldesk_core::SortDirection;
        let schema = TableSchema::new(&setups::setup_columns()).unwrap();
        let mut view = TableView::new(schema);
        apply_sort(&mut view, Some("conf"), true).unwrap();
        assert_eq!(
            view.sort_direction_for("conf"),
            Some(SortDirection::Descending)
        );
    }
}
