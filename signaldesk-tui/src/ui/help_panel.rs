//! Panel 6 — Help: key bindings reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::input::key_bindings;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Key bindings", theme::accent_bold())),
        Line::from(""),
    ];
    for (keys, action) in key_bindings() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<18}"), theme::accent()),
            Span::styled(action, theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "All data on this desk is a static snapshot — nothing is live.",
        theme::muted(),
    )));
    f.render_widget(Paragraph::new(lines), area);
}
