//! Enums shared across catalog modules.

use std::fmt;

use serde::Serialize;

/// Direction of a price move or trend arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// How strongly the Seoul overnight session is steering a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionInfluence {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SessionInfluence {
    pub fn label(self) -> &'static str {
        match self {
            SessionInfluence::Low => "LOW",
            SessionInfluence::Medium => "MEDIUM",
            SessionInfluence::High => "HIGH",
            SessionInfluence::VeryHigh => "VERY HIGH",
        }
    }
}

/// Severity of a feed line or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "→",
        };
        write!(f, "{arrow}")
    }
}
