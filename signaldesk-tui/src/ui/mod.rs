//! Top-level UI layout — tab bar, active panel, status bar, overlays.

pub mod baskets_panel;
pub mod dashboard_panel;
pub mod help_panel;
pub mod intel_panel;
pub mod overlays;
pub mod scanner_panel;
pub mod setups_panel;
pub mod status_bar;
pub mod table;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    match &app.overlay {
        Overlay::Search => overlays::render_search(f, chunks[1], &app.search_input),
        Overlay::Detail(symbol) => overlays::render_dossier(f, chunks[1], symbol),
        Overlay::None => {}
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(" signaldesk ", theme::accent_bold())];
    for i in 0..6 {
        let Some(panel) = Panel::from_index(i) else {
            continue;
        };
        let style = if panel == app.active_panel {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, panel.label()), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).style(theme::background()), area);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", panel.label()))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Dashboard => dashboard_panel::render(f, inner, app),
        Panel::Setups => setups_panel::render(f, inner, app),
        Panel::Scanner => scanner_panel::render(f, inner, app),
        Panel::Intel => intel_panel::render(f, inner, app),
        Panel::Baskets => baskets_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
