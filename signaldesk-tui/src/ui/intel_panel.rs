//! Panel 4 — Intel: stream digest, gems, social posts, consensus signals.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use signaldesk_data::intel::{StreamStatus, Urgency};

use crate::app::AppState;
use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    render_digest(f, rows[0], app);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_gems_and_consensus(f, halves[0], app);
    render_posts(f, halves[1], app);
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::accent())
}

fn render_digest(f: &mut Frame, area: Rect, app: &AppState) {
    let stream = &app.intel.stream;
    let block = section_block("Stream Digest");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let status_style = match stream.status {
        StreamStatus::Live => theme::negative(),
        StreamStatus::Processing => theme::warning(),
        StreamStatus::Completed => theme::positive(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(stream.title.clone(), theme::accent_bold()),
            Span::styled(format!("  [{:?}]", stream.status), status_style),
        ]),
        Line::from(Span::styled(
            format!(
                "{} │ {} viewers │ recorded {}",
                stream.duration,
                format::compact(stream.viewer_count as f64),
                stream.recorded
            ),
            theme::muted(),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} gems, avg {}", stream.gems_found, format::signed_pct(stream.avg_performance)),
                theme::positive(),
            ),
            Span::styled(
                format!(
                    " │ top: {} {}",
                    stream.top_gem.token,
                    format::signed_pct(stream.top_gem.performance)
                ),
                theme::accent(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_gems_and_consensus(f: &mut Frame, area: Rect, app: &AppState) {
    let block = section_block("Gems & Consensus");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for gem in &app.intel.gems {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<5} ", gem.token), theme::accent_bold()),
            Span::styled(
                format!("{} conf {} {}", gem.timestamp, gem.confidence, format::signed_pct(gem.performance)),
                theme::pnl(gem.performance),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  \"{}\"", gem.quote),
            theme::muted(),
        )));
    }

    lines.push(Line::from(""));
    for signal in &app.intel.consensus {
        let urgency_style = match signal.urgency {
            Urgency::High => theme::negative(),
            Urgency::Medium => theme::warning(),
            Urgency::Low => theme::muted(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<5} ", signal.token), theme::accent_bold()),
            Span::styled(signal.call.label(), theme::positive()),
            Span::styled(format!(" {}% ", signal.confidence), theme::confidence(signal.confidence as f64)),
            Span::styled(format!("[{:?}] ", signal.urgency), urgency_style),
            Span::styled(signal.timeframe.clone(), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", signal.reasoning),
            theme::muted(),
        )));
    }

    let scroll = app.intel_scroll.min(lines.len().saturating_sub(1)) as u16;
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).scroll((scroll, 0)), inner);
}

fn render_posts(f: &mut Frame, area: Rect, app: &AppState) {
    let block = section_block("Social");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for post in &app.intel.posts {
        lines.push(Line::from(vec![
            Span::styled(post.account.clone(), theme::accent_bold()),
            Span::styled(format!("  {}", post.posted), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(post.content.clone(), theme::text())));
        lines.push(Line::from(Span::styled(
            format!(
                "  ♥{} ↻{} 💬{} │ {} │ sentiment {:.0}%",
                format::compact(post.likes as f64),
                format::compact(post.reposts as f64),
                post.comments,
                post.tokens.join(" "),
                post.sentiment * 100.0
            ),
            theme::muted(),
        )));
        lines.push(Line::from(""));
    }

    let scroll = app.intel_scroll.min(lines.len().saturating_sub(1)) as u16;
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).scroll((scroll, 0)), inner);
}
