//! Active trading setups — the dataset behind the flagship explorer table.

use serde::Serialize;
use signaldesk_core::{to_records, CellFormat, ColumnSpec, Record, RecordError};

use crate::types::SessionInfluence;

#[derive(Debug, Clone, Serialize)]
pub struct TradingSetup {
    pub id: String,
    pub token: String,
    pub token_name: String,
    pub price: f64,
    pub setup_type: String,
    pub timeframe: String,
    pub confidence: u8,
    pub status: SetupStatus,
    pub direction: Direction,
    pub entry_price: f64,
    pub target1: f64,
    pub target2: f64,
    pub target3: f64,
    pub stop_loss: f64,
    pub risk_reward: f64,
    pub sources: Vec<SignalSource>,
    pub time_remaining: String,
    pub desk_note: Option<String>,
    pub unrealized_pnl: f64,
    pub volume_confirmation: bool,
    pub technical_alignment: u8,
    pub market_context: String,
    pub last_update: String,
    pub indicators: Indicators,
}

/// Nested indicator block. Some fields are formatted strings on purpose —
/// the explorer has to cope with mixed-type columns.
#[derive(Debug, Clone, Serialize)]
pub struct Indicators {
    pub ema34: f64,
    pub sma21: f64,
    pub ema200: f64,
    pub channel_position: String,
    pub channel_level: ChannelLevel,
    pub wick_read: String,
    pub macro_read: String,
    pub mfi: f64,
    pub adx: f64,
    pub di_plus: f64,
    pub di_minus: f64,
    pub volume_24h: String,
    pub volume_profile: VolumeProfile,
    pub session_influence: SessionInfluence,
    pub btc_correlation: f64,
    pub funding: f64,
    pub open_interest: String,
    pub social_sentiment: f64,
    pub whale_activity: WhaleActivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupStatus {
    Active,
    Priority,
    Approaching,
    Triggered,
    Fresh,
}

impl SetupStatus {
    pub const ALL: [SetupStatus; 5] = [
        SetupStatus::Active,
        SetupStatus::Priority,
        SetupStatus::Approaching,
        SetupStatus::Triggered,
        SetupStatus::Fresh,
    ];

    /// The serialized form, used as the categorical filter value.
    pub fn as_str(self) -> &'static str {
        match self {
            SetupStatus::Active => "active",
            SetupStatus::Priority => "priority",
            SetupStatus::Approaching => "approaching",
            SetupStatus::Triggered => "triggered",
            SetupStatus::Fresh => "fresh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SetupStatus::Active => "ACTIVE",
            SetupStatus::Priority => "PRIORITY",
            SetupStatus::Approaching => "APPROACHING",
            SetupStatus::Triggered => "TRIGGERED",
            SetupStatus::Fresh => "FRESH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    Market,
    Stream,
    Social,
    Session,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLevel {
    Support3,
    Support2,
    Support1,
    Neutral,
    Resistance1,
    Resistance2,
    Resistance3,
    Resistance4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeProfile {
    BelowAverage,
    Average,
    AboveAverage,
    High,
    Explosive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WhaleActivity {
    Accumulating,
    Distributing,
    Neutral,
    FomoBuying,
}

/// Column schema for the setups explorer, shared by the TUI and CLI.
pub fn setup_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec { id: "status", label: "Status", path: "status", sortable: true, searchable: false, width: 11, format: CellFormat::Plain },
        ColumnSpec { id: "token", label: "Token", path: "token", sortable: true, searchable: true, width: 6, format: CellFormat::Plain },
        ColumnSpec { id: "name", label: "Name", path: "token_name", sortable: false, searchable: true, width: 10, format: CellFormat::Plain },
        ColumnSpec { id: "price", label: "Price", path: "price", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "setup", label: "Setup", path: "setup_type", sortable: true, searchable: true, width: 18, format: CellFormat::Plain },
        ColumnSpec { id: "dir", label: "Dir", path: "direction", sortable: true, searchable: false, width: 5, format: CellFormat::Plain },
        ColumnSpec { id: "conf", label: "Conf%", path: "confidence", sortable: true, searchable: false, width: 5, format: CellFormat::Integer },
        ColumnSpec { id: "tf", label: "TF", path: "timeframe", sortable: true, searchable: false, width: 4, format: CellFormat::Plain },
        ColumnSpec { id: "pnl", label: "P&L%", path: "unrealized_pnl", sortable: true, searchable: false, width: 7, format: CellFormat::SignedPercent },
        ColumnSpec { id: "entry", label: "Entry", path: "entry_price", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "target", label: "Target", path: "target1", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "stop", label: "Stop", path: "stop_loss", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "rr", label: "R:R", path: "risk_reward", sortable: true, searchable: false, width: 6, format: CellFormat::Ratio },
        ColumnSpec { id: "channel", label: "Channel", path: "indicators.channel_position", sortable: true, searchable: false, width: 8, format: CellFormat::Plain },
        ColumnSpec { id: "mfi", label: "MFI", path: "indicators.mfi", sortable: true, searchable: false, width: 5, format: CellFormat::Plain },
        ColumnSpec { id: "adx", label: "ADX", path: "indicators.adx", sortable: true, searchable: false, width: 5, format: CellFormat::Plain },
        ColumnSpec { id: "social", label: "Social", path: "indicators.social_sentiment", sortable: true, searchable: false, width: 6, format: CellFormat::Plain },
    ]
}

/// Convert the active setups into engine records.
pub fn setup_records() -> Result<Vec<Record>, RecordError> {
    to_records(&active_setups())
}

/// The desk's current setup board.
pub fn active_setups() -> Vec<TradingSetup> {
    vec![
        TradingSetup {
            id: "setup_001".to_string(),
            token: "SOL".to_string(),
            token_name: "Solana".to_string(),
            price: 148.23,
            setup_type: "Channel Bounce".to_string(),
            timeframe: "1H".to_string(),
            confidence: 96,
            status: SetupStatus::Active,
            direction: Direction::Long,
            entry_price: 145.67,
            target1: 156.40,
            target2: 162.80,
            target3: 168.50,
            stop_loss: 138.20,
            risk_reward: 2.8,
            sources: vec![SignalSource::Market, SignalSource::Stream, SignalSource::Social],
            time_remaining: "3h 45m".to_string(),
            desk_note: Some(
                "SOL holding above the +15% band with Seoul flows behind it — continuation favored"
                    .to_string(),
            ),
            unrealized_pnl: 1.76,
            volume_confirmation: true,
            technical_alignment: 94,
            market_context: "BTC bullish + Seoul session active".to_string(),
            last_update: "2 minutes ago".to_string(),
            indicators: Indicators {
                ema34: 143.45,
                sma21: 146.89,
                ema200: 128.67,
                channel_position: "+15.2%".to_string(),
                channel_level: ChannelLevel::Resistance3,
                wick_read: "bullish_continuation".to_string(),
                macro_read: "strong_uptrend".to_string(),
                mfi: 78.4,
                adx: 45.6,
                di_plus: 28.9,
                di_minus: 12.3,
                volume_24h: "2.4B".to_string(),
                volume_profile: VolumeProfile::AboveAverage,
                session_influence: SessionInfluence::High,
                btc_correlation: 0.87,
                funding: -0.0234,
                open_interest: "+12.4%".to_string(),
                social_sentiment: 89.2,
                whale_activity: WhaleActivity::Accumulating,
            },
        },
        TradingSetup {
            id: "setup_002".to_string(),
            token: "PEPE".to_string(),
            token_name: "Pepe".to_string(),
            price: 0.000014,
            setup_type: "Seoul Momentum".to_string(),
            timeframe: "4H".to_string(),
            confidence: 94,
            status: SetupStatus::Priority,
            direction: Direction::Long,
            entry_price: 0.000012,
            target1: 0.000018,
            target2: 0.000022,
            target3: 0.000028,
            stop_loss: 0.000009,
            risk_reward: 3.2,
            sources: vec![SignalSource::Stream, SignalSource::Social, SignalSource::Session],
            time_remaining: "1h 23m".to_string(),
            desk_note: Some("Seoul flow leader — volume profile went vertical".to_string()),
            unrealized_pnl: 16.67,
            volume_confirmation: true,
            technical_alignment: 91,
            market_context: "Seoul momentum session".to_string(),
            last_update: "1 minute ago".to_string(),
            indicators: Indicators {
                ema34: 0.000012,
                sma21: 0.000013,
                ema200: 0.000009,
                channel_position: "+22.8%".to_string(),
                channel_level: ChannelLevel::Resistance4,
                wick_read: "session_breakout".to_string(),
                macro_read: "parabolic_uptrend".to_string(),
                mfi: 92.1,
                adx: 67.8,
                di_plus: 45.2,
                di_minus: 8.4,
                volume_24h: "8.7B".to_string(),
                volume_profile: VolumeProfile::Explosive,
                session_influence: SessionInfluence::VeryHigh,
                btc_correlation: 0.23,
                funding: 0.1456,
                open_interest: "+234.7%".to_string(),
                social_sentiment: 96.4,
                whale_activity: WhaleActivity::FomoBuying,
            },
        },
        TradingSetup {
            id: "setup_003".to_string(),
            token: "WIF".to_string(),
            token_name: "dogwifhat".to_string(),
            price: 2.89,
            setup_type: "Chase Long".to_string(),
            timeframe: "1H".to_string(),
            confidence: 89,
            status: SetupStatus::Approaching,
            direction: Direction::Long,
            entry_price: 2.75,
            target1: 3.20,
            target2: 3.45,
            target3: 3.78,
            stop_loss: 2.55,
            risk_reward: 2.25,
            sources: vec![SignalSource::Market, SignalSource::Social],
            time_remaining: "45m".to_string(),
            desk_note: Some("Following PEPE — watch the breakout above resistance".to_string()),
            unrealized_pnl: 0.0,
            volume_confirmation: false,
            technical_alignment: 87,
            market_context: "Meme momentum building".to_string(),
            last_update: "5 minutes ago".to_string(),
            indicators: Indicators {
                ema34: 2.67,
                sma21: 2.78,
                ema200: 2.34,
                channel_position: "+8.2%".to_string(),
                channel_level: ChannelLevel::Resistance1,
                wick_read: "building_pressure".to_string(),
                macro_read: "uptrend".to_string(),
                mfi: 65.8,
                adx: 38.2,
                di_plus: 24.7,
                di_minus: 16.3,
                volume_24h: "1.8B".to_string(),
                volume_profile: VolumeProfile::AboveAverage,
                session_influence: SessionInfluence::Medium,
                btc_correlation: 0.45,
                funding: 0.0876,
                open_interest: "+45.2%".to_string(),
                social_sentiment: 78.5,
                whale_activity: WhaleActivity::Neutral,
            },
        },
        TradingSetup {
            id: "setup_004".to_string(),
            token: "MATIC".to_string(),
            token_name: "Polygon".to_string(),
            price: 0.87,
            setup_type: "Reversal Short".to_string(),
            timeframe: "4H".to_string(),
            confidence: 85,
            status: SetupStatus::Triggered,
            direction: Direction::Short,
            entry_price: 0.91,
            target1: 0.82,
            target2: 0.76,
            target3: 0.69,
            stop_loss: 0.96,
            risk_reward: 1.8,
            sources: vec![SignalSource::Market],
            time_remaining: "6h 15m".to_string(),
            desk_note: None,
            unrealized_pnl: 4.40,
            volume_confirmation: true,
            technical_alignment: 83,
            market_context: "Overextended correction".to_string(),
            last_update: "8 minutes ago".to_string(),
            indicators: Indicators {
                ema34: 0.89,
                sma21: 0.91,
                ema200: 1.02,
                channel_position: "-12.7%".to_string(),
                channel_level: ChannelLevel::Support2,
                wick_read: "reversal_setup".to_string(),
                macro_read: "downtrend_weakening".to_string(),
                mfi: 34.2,
                adx: 52.1,
                di_plus: 16.8,
                di_minus: 31.4,
                volume_24h: "890M".to_string(),
                volume_profile: VolumeProfile::High,
                session_influence: SessionInfluence::Low,
                btc_correlation: 0.78,
                funding: -0.0145,
                open_interest: "-8.3%".to_string(),
                social_sentiment: 42.1,
                whale_activity: WhaleActivity::Distributing,
            },
        },
        TradingSetup {
            id: "setup_005".to_string(),
            token: "UNI".to_string(),
            token_name: "Uniswap".to_string(),
            price: 7.45,
            setup_type: "Social Override".to_string(),
            timeframe: "15M".to_string(),
            confidence: 92,
            status: SetupStatus::Fresh,
            direction: Direction::Long,
            entry_price: 7.23,
            target1: 8.15,
            target2: 8.67,
            target3: 9.20,
            stop_loss: 6.95,
            risk_reward: 3.5,
            sources: vec![SignalSource::Social, SignalSource::Ai],
            time_remaining: "2h 10m".to_string(),
            desk_note: Some("Massive social momentum — candidate for the next runner".to_string()),
            unrealized_pnl: 3.04,
            volume_confirmation: true,
            technical_alignment: 88,
            market_context: "Social momentum spike".to_string(),
            last_update: "3 minutes ago".to_string(),
            indicators: Indicators {
                ema34: 7.12,
                sma21: 7.28,
                ema200: 6.78,
                channel_position: "+9.8%".to_string(),
                channel_level: ChannelLevel::Resistance2,
                wick_read: "social_breakout".to_string(),
                macro_read: "strong_uptrend".to_string(),
                mfi: 84.3,
                adx: 43.7,
                di_plus: 35.2,
                di_minus: 14.6,
                volume_24h: "1.2B".to_string(),
                volume_profile: VolumeProfile::Explosive,
                session_influence: SessionInfluence::Medium,
                btc_correlation: 0.52,
                funding: 0.0234,
                open_interest: "+89.4%".to_string(),
                social_sentiment: 94.7,
                whale_activity: WhaleActivity::Accumulating,
            },
        },
        TradingSetup {
            id: "setup_006".to_string(),
            token: "BONK".to_string(),
            token_name: "Bonk".to_string(),
            price: 0.000025,
            setup_type: "Seoul Continuation".to_string(),
            timeframe: "1H".to_string(),
            confidence: 87,
            status: SetupStatus::Active,
            direction: Direction::Long,
            entry_price: 0.000023,
            target1: 0.000029,
            target2: 0.000032,
            target3: 0.000037,
            stop_loss: 0.000021,
            risk_reward: 2.4,
            sources: vec![SignalSource::Stream, SignalSource::Session],
            time_remaining: "4h 30m".to_string(),
            desk_note: Some("Running the Seoul continuation playbook".to_string()),
            unrealized_pnl: 8.70,
            volume_confirmation: true,
            technical_alignment: 85,
            market_context: "Seoul session extension".to_string(),
            last_update: "4 minutes ago".to_string(),
            indicators: Indicators {
                ema34: 0.000022,
                sma21: 0.000024,
                ema200: 0.000018,
                channel_position: "+13.6%".to_string(),
                channel_level: ChannelLevel::Resistance2,
                wick_read: "session_continuation".to_string(),
                macro_read: "uptrend".to_string(),
                mfi: 76.9,
                adx: 41.3,
                di_plus: 29.8,
                di_minus: 18.7,
                volume_24h: "3.2B".to_string(),
                volume_profile: VolumeProfile::AboveAverage,
                session_influence: SessionInfluence::High,
                btc_correlation: 0.34,
                funding: 0.0687,
                open_interest: "+67.8%".to_string(),
                social_sentiment: 85.3,
                whale_activity: WhaleActivity::Accumulating,
            },
        },
    ]
}
