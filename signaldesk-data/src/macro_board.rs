//! Macro board — regime card and the desk's primary macro drivers.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MacroBoard {
    pub regime: RegimeCard,
    pub indicators: Vec<MacroIndicator>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegimeCard {
    pub current: MarketRegime,
    /// 0–100 strength of the current regime.
    pub strength: u8,
    pub duration: String,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub next_level: NextLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketRegime {
    Ranging,
    Pumping,
    Dumping,
}

impl MarketRegime {
    pub fn label(self) -> &'static str {
        match self {
            MarketRegime::Ranging => "RANGING",
            MarketRegime::Pumping => "PUMPING",
            MarketRegime::Dumping => "DUMPING",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NextLevel {
    pub label: String,
    pub requirement: String,
    pub probability: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MacroIndicator {
    pub code: String,
    pub name: String,
    pub current: f64,
    pub change_24h: f64,
    /// How strongly the desk agrees with the prevailing direction, 0–100.
    pub desk_agreement: u8,
    pub direction: MacroDirection,
    pub strength: MacroStrength,
    pub mentions: u32,
    pub frames: Vec<TimeframeRead>,
    pub key_levels: KeyLevels,
    pub latest_comment: String,
    /// Impact on crypto when this driver moves as read.
    pub crypto_impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroDirection {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroStrength {
    Weak,
    Moderate,
    Strong,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeframeRead {
    pub frame: String,
    pub direction: MacroDirection,
    pub strength: MacroStrength,
    pub signal: String,
    pub notes: Vec<String>,
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyLevels {
    pub resistance: f64,
    pub near_support: f64,
    pub major_support: f64,
}

pub fn macro_board() -> MacroBoard {
    MacroBoard {
        regime: RegimeCard {
            current: MarketRegime::Pumping,
            strength: 87,
            duration: "4 days".to_string(),
            confidence: 92,
            reasoning: vec![
                "BTC broke key resistance on volume".to_string(),
                "Seoul session showing sustained buying pressure".to_string(),
                "Altcoin rotation confirming bull momentum".to_string(),
                "Risk-on sentiment across all sectors".to_string(),
            ],
            next_level: NextLevel {
                label: "STRONG PUMPING".to_string(),
                requirement: "BTC > $105k with altcoin breakouts".to_string(),
                probability: 73,
            },
        },
        indicators: vec![
            MacroIndicator {
                code: "DXY".to_string(),
                name: "Dollar Index".to_string(),
                current: 103.24,
                change_24h: -0.52,
                desk_agreement: 96,
                direction: MacroDirection::Bearish,
                strength: MacroStrength::Strong,
                mentions: 18,
                frames: vec![
                    TimeframeRead {
                        frame: "15m".to_string(),
                        direction: MacroDirection::Bearish,
                        strength: MacroStrength::Strong,
                        signal: "short".to_string(),
                        notes: vec![
                            "RSI 31, oversold".to_string(),
                            "MACD -0.68 and accelerating".to_string(),
                        ],
                        confidence: 92,
                    },
                    TimeframeRead {
                        frame: "1h".to_string(),
                        direction: MacroDirection::Bearish,
                        strength: MacroStrength::Strong,
                        signal: "short".to_string(),
                        notes: vec!["Support break confirmed on massive volume".to_string()],
                        confidence: 89,
                    },
                    TimeframeRead {
                        frame: "4h".to_string(),
                        direction: MacroDirection::Bearish,
                        strength: MacroStrength::Moderate,
                        signal: "short".to_string(),
                        notes: vec![
                            "Trendline breakdown".to_string(),
                            "EMA death cross".to_string(),
                        ],
                        confidence: 85,
                    },
                ],
                key_levels: KeyLevels {
                    resistance: 104.80,
                    near_support: 102.60,
                    major_support: 101.20,
                },
                latest_comment: "Dollar rolling over is the green light the desk has been \
                                 waiting for."
                    .to_string(),
                crypto_impact: "massive_positive".to_string(),
            },
            MacroIndicator {
                code: "US500".to_string(),
                name: "S&P 500".to_string(),
                current: 5_847.20,
                change_24h: 0.23,
                desk_agreement: 71,
                direction: MacroDirection::Neutral,
                strength: MacroStrength::Weak,
                mentions: 7,
                frames: vec![
                    TimeframeRead {
                        frame: "1h".to_string(),
                        direction: MacroDirection::Neutral,
                        strength: MacroStrength::Weak,
                        signal: "flat".to_string(),
                        notes: vec!["Chop inside yesterday's range".to_string()],
                        confidence: 64,
                    },
                    TimeframeRead {
                        frame: "4h".to_string(),
                        direction: MacroDirection::Bullish,
                        strength: MacroStrength::Moderate,
                        signal: "long".to_string(),
                        notes: vec!["Holding the 20-period base".to_string()],
                        confidence: 70,
                    },
                ],
                key_levels: KeyLevels {
                    resistance: 5_900.0,
                    near_support: 5_790.0,
                    major_support: 5_680.0,
                },
                latest_comment: "Equities are a passenger this week — crypto is trading its \
                                 own flows."
                    .to_string(),
                crypto_impact: "mild_positive".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_card_fields_are_bounded() {
        let board = macro_board();
        assert!(board.regime.strength <= 100);
        assert!(board.regime.next_level.probability <= 100);
    }

    #[test]
    fn indicators_carry_multi_timeframe_reads() {
        let board = macro_board();
        let dxy = &board.indicators[0];
        assert_eq!(dxy.code, "DXY");
        assert_eq!(dxy.frames.len(), 3);
        assert!(dxy.frames.iter().all(|f| f.confidence <= 100));
    }
}
