//! Schema-driven table rendering shared by the setups, scanner, and baskets
//! panels. Headers come from the column schema; sort arrows and the column
//! cursor are drawn from the view state.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use signaldesk_core::{Record, SortDirection};

use crate::app::TablePanelState;
use crate::theme;

/// Per-cell style override: given the column id and the record, return a
/// style or fall back to the default row style.
pub type CellStyler<'a> = &'a dyn Fn(&str, &Record) -> Option<Style>;

pub fn render(f: &mut Frame, area: Rect, state: &TablePanelState, cell_styler: CellStyler) {
    let columns = state.view.schema().columns();
    let visible = state.visible();

    let header_cells = columns.iter().enumerate().map(|(i, column)| {
        let mut label = column.spec().label.to_string();
        match state.view.sort_direction_for(column.id()) {
            Some(SortDirection::Ascending) => label.push('▲'),
            Some(SortDirection::Descending) => label.push('▼'),
            None => {}
        }
        let style = if i == state.col_cursor {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        Cell::from(label).style(style)
    });
    let header = Row::new(header_cells).height(1);

    let rows = visible.iter().enumerate().map(|(i, &record)| {
        let is_cursor = i == state.cursor;
        let row_style = if is_cursor { theme::cursor_row() } else { theme::text() };
        let cells = columns.iter().map(|column| {
            let text = column.render(record);
            let style = if is_cursor {
                row_style
            } else {
                cell_styler(column.id(), record).unwrap_or(row_style)
            };
            Cell::from(text).style(style)
        });
        Row::new(cells).height(1)
    });

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|c| Constraint::Length(c.spec().width))
        .collect();

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, area);
}
