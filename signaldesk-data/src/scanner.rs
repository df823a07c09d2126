//! Scanner heat entries — per-token channel methodology reads.

use serde::Serialize;
use signaldesk_core::{to_records, CellFormat, ColumnSpec, Record, RecordError};

#[derive(Debug, Clone, Serialize)]
pub struct HeatEntry {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    /// 0–100, channel methodology score.
    pub heat_score: u8,
    pub confidence: u8,
    pub rating: DeskRating,
    pub channel: ChannelRead,
    pub technicals: Technicals,
    pub mentions: Mentions,
    pub last_mention: String,
    pub latest_take: String,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeskRating {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl DeskRating {
    pub fn label(self) -> &'static str {
        match self {
            DeskRating::StrongBuy => "STRONG BUY",
            DeskRating::Buy => "BUY",
            DeskRating::Hold => "HOLD",
            DeskRating::Sell => "SELL",
            DeskRating::StrongSell => "STRONG SELL",
        }
    }
}

/// SMA21/EMA34 channel position across three timeframes.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelRead {
    pub m15: TimeframeChannel,
    pub h1: TimeframeChannel,
    pub h4: TimeframeChannel,
    pub overall_signal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeframeChannel {
    pub position: String,
    pub status: ChannelStatus,
    pub sma21: f64,
    pub ema34: f64,
    pub signal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelStatus {
    BreakoutConfirmed,
    BreakoutTest,
    ChannelBounce,
    InChannel,
    Breakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct Technicals {
    pub adx: GaugedValue,
    pub mfi: GaugedValue,
    /// Ratio of current volume to average, e.g. 3.47 = 347%.
    pub volume_ratio: f64,
    pub funding_rate: f64,
    pub funding_tier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugedValue {
    pub value: f64,
    pub signal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mentions {
    pub stream: u32,
    pub social: u32,
    pub total: u32,
}

/// Column schema for the scanner table.
pub fn scanner_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec { id: "symbol", label: "Token", path: "symbol", sortable: true, searchable: true, width: 6, format: CellFormat::Plain },
        ColumnSpec { id: "name", label: "Name", path: "name", sortable: false, searchable: true, width: 10, format: CellFormat::Plain },
        ColumnSpec { id: "price", label: "Price", path: "price", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "chg", label: "24h%", path: "change_24h", sortable: true, searchable: false, width: 7, format: CellFormat::SignedPercent },
        ColumnSpec { id: "heat", label: "Heat", path: "heat_score", sortable: true, searchable: false, width: 5, format: CellFormat::Integer },
        ColumnSpec { id: "conf", label: "Conf%", path: "confidence", sortable: true, searchable: false, width: 5, format: CellFormat::Integer },
        ColumnSpec { id: "rating", label: "Rating", path: "rating", sortable: true, searchable: false, width: 10, format: CellFormat::Plain },
        ColumnSpec { id: "adx", label: "ADX", path: "technicals.adx.value", sortable: true, searchable: false, width: 5, format: CellFormat::Plain },
        ColumnSpec { id: "mfi", label: "MFI", path: "technicals.mfi.value", sortable: true, searchable: false, width: 5, format: CellFormat::Plain },
        ColumnSpec { id: "volx", label: "Vol×", path: "technicals.volume_ratio", sortable: true, searchable: false, width: 5, format: CellFormat::Plain },
        ColumnSpec { id: "funding", label: "Fund%", path: "technicals.funding_rate", sortable: true, searchable: false, width: 7, format: CellFormat::Percent },
        ColumnSpec { id: "mentions", label: "Mentions", path: "mentions.total", sortable: true, searchable: false, width: 8, format: CellFormat::Integer },
    ]
}

pub fn scanner_records() -> Result<Vec<Record>, RecordError> {
    to_records(&heat_entries())
}

pub fn heat_entries() -> Vec<HeatEntry> {
    vec![
        HeatEntry {
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            price: 198.75,
            change_24h: 8.47,
            heat_score: 98,
            confidence: 96,
            rating: DeskRating::StrongBuy,
            channel: ChannelRead {
                m15: TimeframeChannel {
                    position: "+12.4%".to_string(),
                    status: ChannelStatus::BreakoutConfirmed,
                    sma21: 176.80,
                    ema34: 182.30,
                    signal: "strong_long".to_string(),
                },
                h1: TimeframeChannel {
                    position: "+8.7%".to_string(),
                    status: ChannelStatus::BreakoutConfirmed,
                    sma21: 184.20,
                    ema34: 189.40,
                    signal: "long".to_string(),
                },
                h4: TimeframeChannel {
                    position: "+5.2%".to_string(),
                    status: ChannelStatus::BreakoutTest,
                    sma21: 188.90,
                    ema34: 191.20,
                    signal: "long".to_string(),
                },
                overall_signal: "breakout_all_timeframes".to_string(),
            },
            technicals: Technicals {
                adx: GaugedValue { value: 67.4, signal: "bullish_momentum".to_string() },
                mfi: GaugedValue { value: 78.2, signal: "institutional_buying".to_string() },
                volume_ratio: 3.47,
                funding_rate: 0.0847,
                funding_tier: "extreme_high".to_string(),
            },
            mentions: Mentions { stream: 47, social: 23, total: 70 },
            last_mention: "12 seconds ago".to_string(),
            latest_take: "Seoul flow leader, breaking out on massive volume across every frame."
                .to_string(),
            insights: vec![
                "Breakout confirmed on all three timeframes".to_string(),
                "Strongest ADX trend reading in weeks".to_string(),
                "Funding at extreme high — longs paying a premium".to_string(),
            ],
        },
        HeatEntry {
            symbol: "PEPE".to_string(),
            name: "Pepe".to_string(),
            price: 0.0000234,
            change_24h: 15.83,
            heat_score: 92,
            confidence: 89,
            rating: DeskRating::StrongBuy,
            channel: ChannelRead {
                m15: TimeframeChannel {
                    position: "+18.9%".to_string(),
                    status: ChannelStatus::BreakoutConfirmed,
                    sma21: 0.0000195,
                    ema34: 0.0000201,
                    signal: "strong_long".to_string(),
                },
                h1: TimeframeChannel {
                    position: "+14.2%".to_string(),
                    status: ChannelStatus::BreakoutConfirmed,
                    sma21: 0.0000202,
                    ema34: 0.0000208,
                    signal: "strong_long".to_string(),
                },
                h4: TimeframeChannel {
                    position: "+9.6%".to_string(),
                    status: ChannelStatus::BreakoutConfirmed,
                    sma21: 0.0000209,
                    ema34: 0.0000213,
                    signal: "long".to_string(),
                },
                overall_signal: "parabolic_extension".to_string(),
            },
            technicals: Technicals {
                adx: GaugedValue { value: 71.2, signal: "overheated_trend".to_string() },
                mfi: GaugedValue { value: 91.5, signal: "retail_fomo".to_string() },
                volume_ratio: 5.12,
                funding_rate: 0.1456,
                funding_tier: "extreme_high".to_string(),
            },
            mentions: Mentions { stream: 38, social: 41, total: 79 },
            last_mention: "45 seconds ago".to_string(),
            latest_take: "Seoul retail is chasing — ride it with a hard stop, not conviction."
                .to_string(),
            insights: vec![
                "Session volume five times the daily average".to_string(),
                "Funding stretched — squeeze risk on any stall".to_string(),
            ],
        },
        HeatEntry {
            symbol: "WIF".to_string(),
            name: "dogwifhat".to_string(),
            price: 2.89,
            change_24h: 11.2,
            heat_score: 84,
            confidence: 87,
            rating: DeskRating::Buy,
            channel: ChannelRead {
                m15: TimeframeChannel {
                    position: "+6.1%".to_string(),
                    status: ChannelStatus::BreakoutTest,
                    sma21: 2.71,
                    ema34: 2.74,
                    signal: "long".to_string(),
                },
                h1: TimeframeChannel {
                    position: "+4.8%".to_string(),
                    status: ChannelStatus::ChannelBounce,
                    sma21: 2.74,
                    ema34: 2.76,
                    signal: "long".to_string(),
                },
                h4: TimeframeChannel {
                    position: "+2.2%".to_string(),
                    status: ChannelStatus::InChannel,
                    sma21: 2.79,
                    ema34: 2.81,
                    signal: "neutral".to_string(),
                },
                overall_signal: "building".to_string(),
            },
            technicals: Technicals {
                adx: GaugedValue { value: 38.2, signal: "trend_forming".to_string() },
                mfi: GaugedValue { value: 65.8, signal: "steady_inflow".to_string() },
                volume_ratio: 2.10,
                funding_rate: 0.0876,
                funding_tier: "high".to_string(),
            },
            mentions: Mentions { stream: 19, social: 26, total: 45 },
            last_mention: "4 minutes ago".to_string(),
            latest_take: "Second in line behind PEPE — needs the 15m breakout to confirm."
                .to_string(),
            insights: vec![
                "Lagging the session leader by one leg".to_string(),
                "Higher-timeframe channel still undecided".to_string(),
            ],
        },
        HeatEntry {
            symbol: "MATIC".to_string(),
            name: "Polygon".to_string(),
            price: 0.87,
            change_24h: -3.4,
            heat_score: 41,
            confidence: 82,
            rating: DeskRating::Sell,
            channel: ChannelRead {
                m15: TimeframeChannel {
                    position: "-9.8%".to_string(),
                    status: ChannelStatus::Breakdown,
                    sma21: 0.95,
                    ema34: 0.93,
                    signal: "short".to_string(),
                },
                h1: TimeframeChannel {
                    position: "-12.7%".to_string(),
                    status: ChannelStatus::Breakdown,
                    sma21: 0.97,
                    ema34: 0.96,
                    signal: "short".to_string(),
                },
                h4: TimeframeChannel {
                    position: "-7.5%".to_string(),
                    status: ChannelStatus::Breakdown,
                    sma21: 0.94,
                    ema34: 0.92,
                    signal: "short".to_string(),
                },
                overall_signal: "breakdown_confirmed".to_string(),
            },
            technicals: Technicals {
                adx: GaugedValue { value: 52.1, signal: "bearish_momentum".to_string() },
                mfi: GaugedValue { value: 34.2, signal: "outflow".to_string() },
                volume_ratio: 1.85,
                funding_rate: -0.0145,
                funding_tier: "low".to_string(),
            },
            mentions: Mentions { stream: 6, social: 4, total: 10 },
            last_mention: "22 minutes ago".to_string(),
            latest_take: "Below every channel that matters — shorts stay on until a reclaim."
                .to_string(),
            insights: vec![
                "Only reclaiming the h1 channel invalidates the short".to_string(),
            ],
        },
        HeatEntry {
            symbol: "NEAR".to_string(),
            name: "Near Protocol".to_string(),
            price: 8.90,
            change_24h: 4.6,
            heat_score: 73,
            confidence: 84,
            rating: DeskRating::Buy,
            channel: ChannelRead {
                m15: TimeframeChannel {
                    position: "+3.1%".to_string(),
                    status: ChannelStatus::ChannelBounce,
                    sma21: 8.61,
                    ema34: 8.66,
                    signal: "long".to_string(),
                },
                h1: TimeframeChannel {
                    position: "+2.4%".to_string(),
                    status: ChannelStatus::InChannel,
                    sma21: 8.67,
                    ema34: 8.71,
                    signal: "neutral".to_string(),
                },
                h4: TimeframeChannel {
                    position: "+5.9%".to_string(),
                    status: ChannelStatus::BreakoutTest,
                    sma21: 8.38,
                    ema34: 8.45,
                    signal: "long".to_string(),
                },
                overall_signal: "constructive".to_string(),
            },
            technicals: Technicals {
                adx: GaugedValue { value: 29.4, signal: "early_trend".to_string() },
                mfi: GaugedValue { value: 58.3, signal: "steady_inflow".to_string() },
                volume_ratio: 1.42,
                funding_rate: 0.0112,
                funding_tier: "medium".to_string(),
            },
            mentions: Mentions { stream: 11, social: 8, total: 19 },
            last_mention: "9 minutes ago".to_string(),
            latest_take: "Quiet accumulation — the 4h test is the tell.".to_string(),
            insights: vec![
                "AI-narrative rotation candidate on a 4h breakout".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use signaldesk_core::{FieldPath, FieldValue, TableSchema};

    #[test]
    fn schema_resolves_deep_technical_paths() {
        let schema = TableSchema::new(&scanner_columns()).unwrap();
        let records = scanner_records().unwrap();
        let adx = schema.column("adx").unwrap();
        assert_eq!(adx.render(&records[0]), "67.40");
        let mentions = schema.column("mentions").unwrap();
        assert_eq!(mentions.render(&records[0]), "70");
    }

    #[test]
    fn ratings_serialize_snake_case() {
        let records = scanner_records().unwrap();
        let rating = FieldPath::parse("rating").unwrap();
        assert_eq!(records[0].resolve(&rating), FieldValue::Text("strong_buy"));
        assert_eq!(records[3].resolve(&rating), FieldValue::Text("sell"));
    }

    #[test]
    fn heat_scores_are_bounded() {
        for entry in heat_entries() {
            assert!(entry.heat_score <= 100);
            assert!(entry.confidence <= 100);
        }
    }
}
