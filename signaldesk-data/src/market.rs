//! Market overview snapshot: BTC, equity index, Seoul session, risk regime.

use serde::Serialize;

use crate::types::{SessionInfluence, Trend};

#[derive(Debug, Clone, Serialize)]
pub struct MarketStatus {
    pub btc: BtcSnapshot,
    pub index: IndexSnapshot,
    pub seoul_session: SeoulSession,
    pub regime: RegimeGauge,
}

#[derive(Debug, Clone, Serialize)]
pub struct BtcSnapshot {
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub trend: Trend,
    /// Position relative to the SMA21/EMA34 channel.
    pub channel_position: String,
    pub volume_24h: String,
    pub dominance_pct: f64,
    pub fear_greed: u8,
    pub next_resistance: f64,
    pub next_support: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexSnapshot {
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub trend: Trend,
    pub btc_correlation: f64,
    pub session: String,
    pub volatility: String,
    pub next_level: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoulSession {
    pub status: SessionStatus,
    pub influence: SessionInfluence,
    pub active_tokens: Vec<String>,
    pub volume_increase_pct: f64,
    pub time_remaining: String,
    pub top_movers: Vec<TopMover>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Inactive,
    PreMarket,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopMover {
    pub token: String,
    pub change_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegimeGauge {
    pub current: RiskRegime,
    /// 0–10 scale.
    pub strength: f64,
    pub trend: RegimeTrend,
    pub duration: String,
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRegime {
    RiskOn,
    RiskOff,
    Neutral,
    Transition,
}

impl RiskRegime {
    pub fn label(self) -> &'static str {
        match self {
            RiskRegime::RiskOn => "RISK ON",
            RiskRegime::RiskOff => "RISK OFF",
            RiskRegime::Neutral => "NEUTRAL",
            RiskRegime::Transition => "TRANSITION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimeTrend {
    Strengthening,
    Weakening,
    Stable,
}

/// The current market snapshot shown on the dashboard cards.
pub fn market_status() -> MarketStatus {
    MarketStatus {
        btc: BtcSnapshot {
            price: 67_234.56,
            change: 1_567.23,
            change_pct: 2.34,
            trend: Trend::Up,
            channel_position: "Above +12% band".to_string(),
            volume_24h: "28.4B".to_string(),
            dominance_pct: 54.2,
            fear_greed: 78,
            next_resistance: 69_500.0,
            next_support: 65_800.0,
        },
        index: IndexSnapshot {
            name: "S&P 500".to_string(),
            price: 4_156.23,
            change: 33.45,
            change_pct: 0.81,
            trend: Trend::Up,
            btc_correlation: 0.87,
            session: "US OPEN".to_string(),
            volatility: "low".to_string(),
            next_level: 4_200.0,
        },
        seoul_session: SeoulSession {
            status: SessionStatus::Active,
            influence: SessionInfluence::VeryHigh,
            active_tokens: ["PEPE", "WIF", "BONK", "OM", "KLAY"]
                .map(String::from)
                .to_vec(),
            volume_increase_pct: 189.7,
            time_remaining: "2h 34m".to_string(),
            top_movers: vec![
                TopMover { token: "PEPE".to_string(), change_pct: 23.4 },
                TopMover { token: "WIF".to_string(), change_pct: 18.9 },
                TopMover { token: "BONK".to_string(), change_pct: 15.2 },
            ],
        },
        regime: RegimeGauge {
            current: RiskRegime::RiskOn,
            strength: 9.2,
            trend: RegimeTrend::Strengthening,
            duration: "4 days".to_string(),
            confidence: 94,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_internally_consistent() {
        let status = market_status();
        assert!(status.btc.next_support < status.btc.price);
        assert!(status.btc.price < status.btc.next_resistance);
        assert_eq!(status.seoul_session.top_movers.len(), 3);
        assert!(status.regime.strength <= 10.0);
    }

    #[test]
    fn enums_serialize_snake_case() {
        let json = serde_json::to_value(market_status()).unwrap();
        assert_eq!(json["seoul_session"]["status"], "active");
        assert_eq!(json["seoul_session"]["influence"], "very_high");
        assert_eq!(json["regime"]["current"], "risk_on");
    }
}
