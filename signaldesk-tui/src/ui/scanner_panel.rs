//! Panel 3 — Scanner: heat table with a confidence gate and per-row insights.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use signaldesk_core::Record;

use crate::app::AppState;
use crate::theme;
use crate::ui::table;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    render_stats(f, chunks[0], app);

    if app.scanner.visible_len() == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing above the gate. Press m to lower it.",
            theme::muted(),
        )));
        f.render_widget(empty, chunks[1]);
    } else {
        table::render(f, chunks[1], &app.scanner, &scanner_cell_style);
    }

    render_selected_take(f, chunks[2], app);
}

fn render_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let gate = match app.scanner_threshold() {
        Some(min) => format!("conf >= {min:.0}"),
        None => "all".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{} tracked │ gate: {gate}", app.scanner.records.len()),
            theme::accent(),
        ),
        Span::styled("   [m]gate [h/l]column [s]sort [j/k]row", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Latest desk take and insights for the row under the cursor.
fn render_selected_take(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(record) = app.scanner.selected() else {
        return;
    };
    let value = record.as_value();
    let symbol = value["symbol"].as_str().unwrap_or("-");
    let take = value["latest_take"].as_str().unwrap_or("");
    let last = value["last_mention"].as_str().unwrap_or("-");

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{symbol} "), theme::accent_bold()),
        Span::styled(format!("(last mention {last}): "), theme::muted()),
        Span::styled(take.to_string(), theme::text()),
    ])];
    if let Some(insights) = value["insights"].as_array() {
        for insight in insights.iter().take(2) {
            if let Some(text) = insight.as_str() {
                lines.push(Line::from(Span::styled(
                    format!("  • {text}"),
                    theme::muted(),
                )));
            }
        }
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn scanner_cell_style(column_id: &str, record: &Record) -> Option<Style> {
    let value = record.as_value();
    match column_id {
        "heat" => value["heat_score"]
            .as_f64()
            .map(|h| theme::heat(h.round() as u8)),
        "conf" => value["confidence"].as_f64().map(theme::confidence),
        "chg" => value["change_24h"].as_f64().map(theme::pnl),
        "funding" => value["technicals"]["funding_rate"].as_f64().map(|rate| {
            if rate >= 0.08 {
                theme::negative()
            } else if rate < 0.0 {
                theme::positive()
            } else {
                theme::neutral()
            }
        }),
        "rating" => match value["rating"].as_str() {
            Some("strong_buy") => Some(theme::positive()),
            Some("buy") => Some(theme::accent()),
            Some("sell") | Some("strong_sell") => Some(theme::negative()),
            _ => None,
        },
        _ => None,
    }
}
