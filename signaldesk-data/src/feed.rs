//! Live update feed and the alert center lists.

use serde::Serialize;

use crate::types::Severity;

#[derive(Debug, Clone, Serialize)]
pub struct UpdateEntry {
    /// Wall-clock label, e.g. "14:52:34".
    pub time: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub time: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Critical,
    Setup,
    Intelligence,
}

impl AlertCategory {
    pub fn label(self) -> &'static str {
        match self {
            AlertCategory::Critical => "CRITICAL",
            AlertCategory::Setup => "SETUP",
            AlertCategory::Intelligence => "INTEL",
        }
    }
}

pub fn live_updates() -> Vec<UpdateEntry> {
    vec![
        UpdateEntry {
            time: "14:52:34".to_string(),
            message: "PEPE broke above resistance — setup triggered".to_string(),
            severity: Severity::Success,
        },
        UpdateEntry {
            time: "14:51:12".to_string(),
            message: "Seoul session volume spike across meme tokens".to_string(),
            severity: Severity::Info,
        },
        UpdateEntry {
            time: "14:49:45".to_string(),
            message: "SOL holding the +15% band — continuation likely".to_string(),
            severity: Severity::Info,
        },
        UpdateEntry {
            time: "14:48:23".to_string(),
            message: "WIF approaching entry zone — watch for confirmation".to_string(),
            severity: Severity::Warning,
        },
        UpdateEntry {
            time: "14:47:01".to_string(),
            message: "BTC correlation at 87% — strong market alignment".to_string(),
            severity: Severity::Success,
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            category: AlertCategory::Critical,
            title: "PEPE funding stretched".to_string(),
            message: "Funding at 14.6% — squeeze risk if momentum stalls".to_string(),
            time: "14:50".to_string(),
            token: Some("PEPE".to_string()),
        },
        Alert {
            category: AlertCategory::Setup,
            title: "WIF entry zone".to_string(),
            message: "Price within 1% of the 2.75 trigger".to_string(),
            time: "14:48".to_string(),
            token: Some("WIF".to_string()),
        },
        Alert {
            category: AlertCategory::Setup,
            title: "MATIC short triggered".to_string(),
            message: "Reversal short filled at 0.91".to_string(),
            time: "14:31".to_string(),
            token: Some("MATIC".to_string()),
        },
        Alert {
            category: AlertCategory::Intelligence,
            title: "Stream digest ready".to_string(),
            message: "8 gems extracted from today's session — avg +24.7%".to_string(),
            time: "14:12".to_string(),
            token: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_are_reverse_chronological() {
        let updates = live_updates();
        for pair in updates.windows(2) {
            assert!(pair[0].time > pair[1].time);
        }
    }

    #[test]
    fn every_category_is_represented() {
        let alerts = alerts();
        for category in [
            AlertCategory::Critical,
            AlertCategory::Setup,
            AlertCategory::Intelligence,
        ] {
            assert!(alerts.iter().any(|a| a.category == category));
        }
    }
}
