//! Panel 2 — Setups: the flagship explorer over the active setup board.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use signaldesk_core::Record;

use crate::app::{AppState, ConfidenceBand};
use crate::theme;
use crate::ui::table;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    render_controls(f, chunks[0], app);
    render_counts(f, chunks[1], app);

    if app.setups.visible_len() == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No setups match the current filters. Press x to reset.",
            theme::muted(),
        )));
        f.render_widget(empty, chunks[2]);
        return;
    }

    table::render(f, chunks[2], &app.setups, &setup_cell_style);
}

fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let search = app.setups.view.search();
    let search_span = if search.is_empty() {
        Span::styled("search: -", theme::muted())
    } else {
        Span::styled(format!("search: {search}"), theme::accent())
    };

    let status_span = match app.status_filter {
        Some(status) => Span::styled(format!("status: {}", status.label()), theme::accent()),
        None => Span::styled("status: all", theme::muted()),
    };

    let band_style = if app.confidence_band == ConfidenceBand::All {
        theme::muted()
    } else {
        theme::accent()
    };
    let band_span = Span::styled(
        format!("conf: {}", app.confidence_band.label()),
        band_style,
    );

    let line = Line::from(vec![
        search_span,
        Span::styled(" │ ", theme::muted()),
        status_span,
        Span::styled(" │ ", theme::muted()),
        band_span,
        Span::styled(
            "   [/]search [f]status [g]conf [h/l]column [s]sort [x]reset [Enter]dossier",
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_counts(f: &mut Frame, area: Rect, app: &AppState) {
    let visible = app.setups.visible_len();
    let total = app.setups.records.len();
    let line = Line::from(vec![Span::styled(
        format!("{visible} of {total} setups"),
        theme::accent(),
    )]);
    f.render_widget(Paragraph::new(line), area);
}

fn setup_cell_style(column_id: &str, record: &Record) -> Option<Style> {
    let value = record.as_value();
    match column_id {
        "conf" => value["confidence"].as_f64().map(theme::confidence),
        "pnl" => value["unrealized_pnl"].as_f64().map(theme::pnl),
        "dir" => match value["direction"].as_str() {
            Some("Long") => Some(theme::positive()),
            Some("Short") => Some(theme::negative()),
            _ => None,
        },
        "status" => match value["status"].as_str() {
            Some("active") => Some(theme::positive()),
            Some("priority") => Some(theme::warning()),
            Some("approaching") => Some(theme::accent()),
            Some("triggered") => Some(theme::neutral()),
            _ => None,
        },
        "channel" => value["indicators"]["channel_position"]
            .as_str()
            .map(|p| if p.starts_with('-') { theme::negative() } else { theme::positive() }),
        "social" => value["indicators"]["social_sentiment"].as_f64().map(|s| {
            if s >= 70.0 {
                theme::positive()
            } else if s < 30.0 {
                theme::negative()
            } else {
                theme::neutral()
            }
        }),
        _ => None,
    }
}
