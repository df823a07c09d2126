//! Panel 5 — Baskets: cycle outlook plus the long/short holdings tables.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use signaldesk_core::Record;
use signaldesk_data::baskets::CyclePhase;

use crate::app::AppState;
use crate::format;
use crate::theme;
use crate::ui::table;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);

    render_outlook(f, rows[0], app);
    render_basket_header(f, rows[1], app);
    table::render(f, rows[2], &app.holdings, &holding_cell_style);
    render_selected_note(f, rows[3], app);
}

fn render_outlook(f: &mut Frame, area: Rect, app: &AppState) {
    let outlook = &app.outlook;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Cycle Outlook ")
        .title_style(theme::accent());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let phase_style = match outlook.phase {
        CyclePhase::Long => theme::positive(),
        CyclePhase::Short => theme::negative(),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} cycle ", outlook.phase.label()), phase_style),
            Span::styled(
                format!(
                    "│ {}% confidence │ {} │ review {}",
                    outlook.confidence, outlook.duration, outlook.next_review
                ),
                theme::muted(),
            ),
        ]),
        Line::from(Span::styled(outlook.reasoning.clone(), theme::text())),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_basket_header(f: &mut Frame, area: Rect, app: &AppState) {
    let basket = app.current_basket();
    let line = Line::from(vec![
        Span::styled(format!("{} ", basket.name), theme::accent_bold()),
        Span::styled(
            format!(
                "[{:?}] avg {} │ updated {} │ {} holdings",
                basket.status,
                format::signed_pct(basket.avg_performance),
                basket.last_updated,
                basket.holdings.len()
            ),
            theme::muted(),
        ),
        Span::styled("   [b]switch basket [h/l]column [s]sort", theme::muted()),
    ]);
    let desc = Line::from(Span::styled(basket.description.clone(), theme::muted()));
    f.render_widget(Paragraph::new(vec![line, desc]), area);
}

fn render_selected_note(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(record) = app.holdings.selected() else {
        return;
    };
    let value = record.as_value();
    let symbol = value["symbol"].as_str().unwrap_or("-");
    let rationale = value["rationale"].as_str().unwrap_or("");
    let note = value["desk_note"].as_str().unwrap_or("");

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{symbol}: "), theme::accent_bold()),
            Span::styled(rationale.to_string(), theme::text()),
        ]),
        Line::from(Span::styled(format!("  note: {note}"), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn holding_cell_style(column_id: &str, record: &Record) -> Option<Style> {
    let value = record.as_value();
    match column_id {
        "perf" => value["performance_pct"].as_f64().map(theme::pnl),
        "symbol" => Some(theme::accent_bold()),
        "weight" => value["weight_pct"].as_f64().map(|w| {
            if w >= 15.0 {
                theme::warning()
            } else {
                theme::muted()
            }
        }),
        _ => None,
    }
}
