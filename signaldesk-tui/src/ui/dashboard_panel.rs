//! Panel 1 — Dashboard: market cards, performance strip, top setups, feed.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use signaldesk_data::macro_board::MacroDirection;
use signaldesk_data::market::{RegimeGauge, SeoulSession};

use crate::app::AppState;
use crate::format;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    render_market_cards(f, rows[0], app);
    render_performance_strip(f, rows[1], app);
    render_macro_strip(f, rows[2], app);
    render_lower(f, rows[3], app);
}

fn render_market_cards(f: &mut Frame, area: Rect, app: &AppState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_btc_card(f, cards[0], app);
    render_index_card(f, cards[1], app);
    render_session_card(f, cards[2], &app.market.seoul_session);
    render_regime_card(f, cards[3], &app.market.regime);
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::accent())
}

fn render_btc_card(f: &mut Frame, area: Rect, app: &AppState) {
    let btc = &app.market.btc;
    let block = card_block("BTC");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format::price(btc.price), theme::text()),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", btc.trend, format::signed_pct(btc.change_pct)),
                theme::pnl(btc.change_pct),
            ),
        ]),
        Line::from(Span::styled(btc.channel_position.clone(), theme::positive())),
        Line::from(Span::styled(
            format!("vol {} │ dom {:.1}%", btc.volume_24h, btc.dominance_pct),
            theme::muted(),
        )),
        Line::from(Span::styled(
            format!("F&G {} │ R {} S {}", btc.fear_greed, format::compact(btc.next_resistance), format::compact(btc.next_support)),
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_index_card(f: &mut Frame, area: Rect, app: &AppState) {
    let index = &app.market.index;
    let block = card_block(&index.name);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:.2}", index.price), theme::text()),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", index.trend, format::signed_pct(index.change_pct)),
                theme::pnl(index.change_pct),
            ),
        ]),
        Line::from(Span::styled(
            format!("BTC corr {:.0}%", index.btc_correlation * 100.0),
            theme::accent(),
        )),
        Line::from(Span::styled(
            format!("{} │ vol {}", index.session, index.volatility),
            theme::muted(),
        )),
        Line::from(Span::styled(
            format!("next level {:.0}", index.next_level),
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_session_card(f: &mut Frame, area: Rect, session: &SeoulSession) {
    let block = card_block("Seoul Session");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let movers = session
        .top_movers
        .iter()
        .map(|m| format!("{} {}", m.token, format::signed_pct(m.change_pct)))
        .collect::<Vec<_>>()
        .join("  ");

    let lines = vec![
        Line::from(vec![
            Span::styled(
                session.influence.label(),
                theme::session_influence(session.influence),
            ),
            Span::styled(
                format!(" │ vol +{:.0}%", session.volume_increase_pct),
                theme::positive(),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} remaining", session.time_remaining),
            theme::muted(),
        )),
        Line::from(Span::styled(movers, theme::text())),
        Line::from(Span::styled(
            session.active_tokens.join(" "),
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_regime_card(f: &mut Frame, area: Rect, regime: &RegimeGauge) {
    let block = card_block("Regime");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(regime.current.label(), theme::positive())),
        Line::from(Span::styled(
            format!("strength {:.1}/10", regime.strength),
            theme::accent(),
        )),
        Line::from(Span::styled(
            format!("{:?} │ {}", regime.trend, regime.duration),
            theme::muted(),
        )),
        Line::from(Span::styled(
            format!("confidence {}%", regime.confidence),
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_performance_strip(f: &mut Frame, area: Rect, app: &AppState) {
    let today = &app.performance.today;
    let block = card_block("Desk Today");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(format!("{} setups ", today.total_setups), theme::text()),
        Span::styled(format!("│ {} active ", today.active_setups), theme::accent()),
        Span::styled(format!("│ win {:.1}% ", today.win_rate), theme::positive()),
        Span::styled(
            format!("│ ret {} ", format::signed_pct(today.total_return)),
            theme::pnl(today.total_return),
        ),
        Span::styled(
            format!(
                "│ best {} {} ",
                today.best_performer.token,
                format::signed_pct(today.best_performer.return_pct)
            ),
            theme::positive(),
        ),
        Span::styled(format!("│ sharpe {:.2}", today.sharpe_ratio), theme::accent()),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

fn render_macro_strip(f: &mut Frame, area: Rect, app: &AppState) {
    let board = &app.macro_board;
    let block = card_block("Macro");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let regime = &board.regime;
    let mut lines = vec![Line::from(vec![
        Span::styled(regime.current.label(), theme::positive()),
        Span::styled(
            format!(
                " {}% │ {} │ next: {} ({}%, needs {})",
                regime.strength,
                regime.duration,
                regime.next_level.label,
                regime.next_level.probability,
                regime.next_level.requirement
            ),
            theme::muted(),
        ),
    ])];

    let drivers: Vec<Span> = board
        .indicators
        .iter()
        .flat_map(|ind| {
            let style = match ind.direction {
                MacroDirection::Bullish => theme::positive(),
                MacroDirection::Bearish => theme::negative(),
                MacroDirection::Neutral => theme::muted(),
            };
            vec![
                Span::styled(
                    format!("{} {:.2} {}", ind.code, ind.current, format::signed_pct(ind.change_24h)),
                    style,
                ),
                Span::styled(
                    format!(" (desk {}%, {:?})  ", ind.desk_agreement, ind.strength),
                    theme::muted(),
                ),
            ]
        })
        .collect();
    lines.push(Line::from(drivers));
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_lower(f: &mut Frame, area: Rect, app: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_top_setups(f, halves[0], app);

    let feed_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(halves[1]);

    render_feed(f, feed_rows[0], app);
    render_alerts(f, feed_rows[1], app);
}

fn render_top_setups(f: &mut Frame, area: Rect, app: &AppState) {
    let block = card_block("Top Setups");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        format!("{:<6} {:<18} {:>5} {:>7} {:>6}", "Token", "Setup", "Conf", "P&L%", "R:R"),
        theme::muted(),
    ))];
    for record in &app.top_setups {
        let value = record.as_value();
        let token = value["token"].as_str().unwrap_or("-");
        let setup = value["setup_type"].as_str().unwrap_or("-");
        let conf = value["confidence"].as_f64().unwrap_or(0.0);
        let pnl = value["unrealized_pnl"].as_f64().unwrap_or(0.0);
        let rr = value["risk_reward"].as_f64().unwrap_or(0.0);
        lines.push(Line::from(vec![
            Span::styled(format!("{token:<6} "), theme::accent_bold()),
            Span::styled(format!("{setup:<18} "), theme::text()),
            Span::styled(format!("{conf:>4.0} "), theme::confidence(conf)),
            Span::styled(format!("{:>7} ", format::signed_pct(pnl)), theme::pnl(pnl)),
            Span::styled(format!("{rr:>5.1}"), theme::muted()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "Press 2 for the full explorer",
        theme::muted(),
    )));
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_feed(f: &mut Frame, area: Rect, app: &AppState) {
    let block = card_block("Live Feed");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = app
        .updates
        .iter()
        .map(|update| {
            Line::from(vec![
                Span::styled(format!("[{}] ", update.time), theme::muted()),
                Span::styled(update.message.clone(), theme::severity(update.severity)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_alerts(f: &mut Frame, area: Rect, app: &AppState) {
    let block = card_block("Alerts");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = app
        .alerts
        .iter()
        .map(|alert| {
            Line::from(vec![
                Span::styled(format!("[{}] ", alert.time), theme::muted()),
                Span::styled(
                    format!("{} ", alert.category.label()),
                    theme::alert_category(alert.category),
                ),
                Span::styled(format!("{}: ", alert.title), theme::text()),
                Span::styled(alert.message.clone(), theme::muted()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
