//! Bottom status bar — row counts for the active table, transient messages.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Panel, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let counts = match app.active_panel {
        Panel::Setups => Some((app.setups.visible_len(), app.setups.records.len())),
        Panel::Scanner => Some((app.scanner.visible_len(), app.scanner.records.len())),
        Panel::Baskets => Some((app.holdings.visible_len(), app.holdings.records.len())),
        _ => None,
    };
    if let Some((visible, total)) = counts {
        spans.push(Span::styled(
            format!(" {visible}/{total} rows"),
            theme::accent(),
        ));
        spans.push(Span::styled(" │ ", theme::muted()));
    }

    spans.push(Span::styled("Tab: next panel │ q: quit", theme::muted()));

    if let Some((message, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(" │ ", theme::muted()));
        spans.push(Span::styled(message.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
