//! Neon-on-charcoal theme tokens and domain color helpers.
//!
//! Style functions rather than a palette struct: call sites stay short and
//! every color decision lives in one module.

use ratatui::style::{Color, Modifier, Style};

use signaldesk_data::feed::AlertCategory;
use signaldesk_data::setups::SetupStatus;
use signaldesk_data::types::{SessionInfluence, Severity};

const BACKGROUND: Color = Color::Rgb(16, 17, 20);
const ACCENT: Color = Color::Rgb(0, 229, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 136);
const NEGATIVE: Color = Color::Rgb(255, 64, 129);
const WARNING: Color = Color::Rgb(255, 152, 0);
const NEUTRAL: Color = Color::Rgb(149, 117, 205);
const MUTED: Color = Color::Rgb(110, 134, 168);
const TEXT: Color = Color::Rgb(235, 235, 235);

pub fn background() -> Style {
    Style::default().bg(BACKGROUND)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn panel_title(active: bool) -> Style {
    if active { accent_bold() } else { muted() }
}

pub fn cursor_row() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(Color::Rgb(40, 44, 52))
        .add_modifier(Modifier::BOLD)
}

/// Green for gains, pink for losses.
pub fn pnl(value: f64) -> Style {
    if value >= 0.0 { positive() } else { negative() }
}

/// Confidence tiering used across setups and scanner rows.
pub fn confidence(value: f64) -> Style {
    match value {
        v if v >= 95.0 => positive(),
        v if v >= 90.0 => accent(),
        v if v >= 80.0 => neutral(),
        _ => muted(),
    }
}

/// Heat score coloring for the scanner.
pub fn heat(score: u8) -> Style {
    match score {
        s if s >= 90 => negative().add_modifier(Modifier::BOLD),
        s if s >= 75 => warning(),
        s if s >= 50 => accent(),
        _ => muted(),
    }
}

pub fn setup_status(status: SetupStatus) -> Style {
    match status {
        SetupStatus::Active => positive(),
        SetupStatus::Priority => warning(),
        SetupStatus::Approaching => accent(),
        SetupStatus::Triggered => neutral(),
        SetupStatus::Fresh => text(),
    }
}

pub fn session_influence(influence: SessionInfluence) -> Style {
    match influence {
        SessionInfluence::VeryHigh => negative(),
        SessionInfluence::High => warning(),
        SessionInfluence::Medium => accent(),
        SessionInfluence::Low => muted(),
    }
}

pub fn severity(level: Severity) -> Style {
    match level {
        Severity::Success => positive(),
        Severity::Info => accent(),
        Severity::Warning => warning(),
        Severity::Critical => negative(),
    }
}

pub fn alert_category(category: AlertCategory) -> Style {
    match category {
        AlertCategory::Critical => negative(),
        AlertCategory::Setup => accent(),
        AlertCategory::Intelligence => neutral(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_splits_on_zero() {
        assert_eq!(pnl(1.76), positive());
        assert_eq!(pnl(-4.2), negative());
        assert_eq!(pnl(0.0), positive());
    }

    #[test]
    fn confidence_tiers() {
        assert_eq!(confidence(96.0), positive());
        assert_eq!(confidence(92.0), accent());
        assert_eq!(confidence(85.0), neutral());
        assert_eq!(confidence(70.0), muted());
    }

    #[test]
    fn heat_tiers() {
        assert_eq!(heat(98), negative().add_modifier(Modifier::BOLD));
        assert_eq!(heat(84), warning());
        assert_eq!(heat(60), accent());
        assert_eq!(heat(41), muted());
    }

    #[test]
    fn status_colors_are_distinct_for_active_states() {
        assert_ne!(setup_status(SetupStatus::Active), setup_status(SetupStatus::Priority));
        assert_ne!(setup_status(SetupStatus::Active), setup_status(SetupStatus::Triggered));
    }
}
