//! Overlay widgets — setups search editor and the token dossier.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use signaldesk_data::dossier::{self, Importance, Sentiment};

use crate::format;
use crate::theme;
use crate::ui::centered_rect;

/// Free-text search editor for the setups explorer.
pub fn render_search(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Search Setups [Enter]apply [Esc]cancel ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  > ", theme::muted()),
            Span::styled(input.to_string(), theme::text()),
            Span::styled("█", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Matches token, name, and setup type. Empty clears.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// Token dossier drill-down.
pub fn render_dossier(f: &mut Frame, area: Rect, symbol: &str) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {symbol} Dossier [Esc]close "))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(dossier) = dossier::dossier_for(symbol) else {
        let text = Paragraph::new(Line::from(Span::styled(
            format!("No dossier on file for {symbol}."),
            theme::muted(),
        )));
        f.render_widget(text, inner);
        return;
    };

    let analysis = &dossier.analysis;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ({})", dossier.name, dossier.symbol), theme::accent_bold()),
            Span::styled(
                format!(
                    "  {} {}",
                    format::price(dossier.price),
                    format::signed_pct(dossier.change_24h_pct)
                ),
                theme::pnl(dossier.change_24h_pct),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "mcap {} │ 24h vol {}",
                format::compact(dossier.market_cap),
                format::compact(dossier.volume_24h)
            ),
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", analysis.recommendation),
                theme::positive(),
            ),
            Span::styled(
                format!(
                    "rating {:.1}/10 │ conf {}% │ {}",
                    analysis.rating, analysis.confidence, analysis.timeframe
                ),
                theme::accent(),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "target {} │ stop {} │ r:r {:.1}:1",
                format::price(analysis.target_price),
                format::price(analysis.stop_loss),
                analysis.risk_reward
            ),
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled("Key points", theme::accent())),
    ];
    for point in &analysis.key_points {
        lines.push(Line::from(Span::styled(format!("  • {point}"), theme::text())));
    }
    lines.push(Line::from(Span::styled("Risks", theme::warning())));
    for risk in &analysis.risks {
        lines.push(Line::from(Span::styled(format!("  • {risk}"), theme::muted())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Mentions ({} this week)", dossier.mentions.total),
        theme::accent(),
    )));
    for mention in &dossier.mentions.recent {
        let importance_style = match mention.importance {
            Importance::Critical => theme::negative(),
            Importance::High => theme::warning(),
            Importance::Medium | Importance::Low => theme::muted(),
        };
        let sentiment_style = match mention.sentiment {
            Sentiment::Bullish => theme::positive(),
            Sentiment::Bearish => theme::negative(),
            Sentiment::Neutral => theme::muted(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", mention.date), theme::muted()),
            Span::styled(format!("[{:?}] ", mention.importance), importance_style),
            Span::styled(format!("{:?} ", mention.sentiment), sentiment_style),
            Span::styled(format!("{} @ {}", mention.stream, mention.timestamp), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    \"{}\"", mention.quote),
            theme::text(),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
