//! Token dossiers — deep per-symbol detail behind the Enter overlay.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TokenDossier {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h_pct: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub analysis: DeskAnalysis,
    pub mentions: MentionLog,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeskAnalysis {
    /// Out of 10.
    pub rating: f64,
    pub confidence: u8,
    pub recommendation: String,
    pub target_price: f64,
    pub stop_loss: f64,
    pub risk_reward: f64,
    pub timeframe: String,
    pub key_points: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentionLog {
    /// Mentions over the trailing week.
    pub total: u32,
    pub recent: Vec<StreamMention>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamMention {
    pub date: NaiveDate,
    pub stream: String,
    pub timestamp: String,
    pub quote: String,
    pub context: String,
    pub sentiment: Sentiment,
    pub importance: Importance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

/// Look up a dossier by symbol, case-insensitively.
pub fn dossier_for(symbol: &str) -> Option<TokenDossier> {
    dossiers()
        .into_iter()
        .find(|d| d.symbol.eq_ignore_ascii_case(symbol))
}

pub fn dossiers() -> Vec<TokenDossier> {
    vec![
        TokenDossier {
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            price: 238.45,
            change_24h_pct: 5.47,
            market_cap: 115_400_000_000.0,
            volume_24h: 4_200_000_000.0,
            analysis: DeskAnalysis {
                rating: 9.2,
                confidence: 95,
                recommendation: "STRONG BUY".to_string(),
                target_price: 275.0,
                stop_loss: 220.0,
                risk_reward: 2.8,
                timeframe: "1-2 weeks".to_string(),
                key_points: vec![
                    "Breakout confirmed above the $235 resistance".to_string(),
                    "Seoul volume surge signals institutional interest".to_string(),
                    "Network activity at all-time highs".to_string(),
                    "Desk flagged this exact setup three days ago".to_string(),
                ],
                risks: vec![
                    "BTC correlation risk if macro turns".to_string(),
                    "Profit-taking likely at the $250 shelf".to_string(),
                    "Dependent on broad altcoin appetite".to_string(),
                ],
            },
            mentions: MentionLog {
                total: 47,
                recent: vec![
                    StreamMention {
                        date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
                        stream: "Seoul Session Analysis".to_string(),
                        timestamp: "23:45".to_string(),
                        quote: "SOL looks pristine here — this breakout pattern is textbook."
                            .to_string(),
                        context: "Technical analysis".to_string(),
                        sentiment: Sentiment::Bullish,
                        importance: Importance::High,
                    },
                    StreamMention {
                        date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
                        stream: "Seoul Session Analysis".to_string(),
                        timestamp: "45:12".to_string(),
                        quote: "If SOL holds above $235, next target is $275.".to_string(),
                        context: "Price prediction".to_string(),
                        sentiment: Sentiment::Bullish,
                        importance: Importance::Critical,
                    },
                    StreamMention {
                        date: NaiveDate::from_ymd_opt(2024, 12, 14).unwrap(),
                        stream: "Altcoins Finding Momentum".to_string(),
                        timestamp: "18:30".to_string(),
                        quote: "The SOL ecosystem is on fire — fees, transactions, everything \
                                pointing up."
                            .to_string(),
                        context: "Fundamental analysis".to_string(),
                        sentiment: Sentiment::Bullish,
                        importance: Importance::High,
                    },
                ],
            },
        },
        TokenDossier {
            symbol: "PEPE".to_string(),
            name: "Pepe".to_string(),
            price: 0.0000234,
            change_24h_pct: 15.83,
            market_cap: 9_800_000_000.0,
            volume_24h: 8_700_000_000.0,
            analysis: DeskAnalysis {
                rating: 8.6,
                confidence: 89,
                recommendation: "BUY".to_string(),
                target_price: 0.000028,
                stop_loss: 0.0000195,
                risk_reward: 2.1,
                timeframe: "days".to_string(),
                key_points: vec![
                    "Seoul session leader with explosive volume".to_string(),
                    "Social sentiment at cycle highs".to_string(),
                ],
                risks: vec![
                    "Funding stretched — squeeze risk on stalls".to_string(),
                    "Meme beta cuts both ways".to_string(),
                ],
            },
            mentions: MentionLog {
                total: 38,
                recent: vec![StreamMention {
                    date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
                    stream: "Seoul Session Analysis".to_string(),
                    timestamp: "1:23:45".to_string(),
                    quote: "PEPE is the Seoul flow in its purest form right now.".to_string(),
                    context: "Flow analysis".to_string(),
                    sentiment: Sentiment::Bullish,
                    importance: Importance::High,
                }],
            },
        },
        TokenDossier {
            symbol: "UNI".to_string(),
            name: "Uniswap".to_string(),
            price: 7.45,
            change_24h_pct: 3.04,
            market_cap: 5_600_000_000.0,
            volume_24h: 1_200_000_000.0,
            analysis: DeskAnalysis {
                rating: 8.1,
                confidence: 88,
                recommendation: "BUY".to_string(),
                target_price: 9.20,
                stop_loss: 6.95,
                risk_reward: 3.5,
                timeframe: "1 week".to_string(),
                key_points: vec![
                    "Social momentum spike with technical alignment".to_string(),
                    "DEX volume share grinding higher".to_string(),
                ],
                risks: vec!["Momentum fades fast if the rotation stalls".to_string()],
            },
            mentions: MentionLog {
                total: 12,
                recent: vec![StreamMention {
                    date: NaiveDate::from_ymd_opt(2024, 12, 13).unwrap(),
                    stream: "What Alts Are Ready?".to_string(),
                    timestamp: "12:15".to_string(),
                    quote: "UNI is quietly setting up — watch the social metrics.".to_string(),
                    context: "Setup identification".to_string(),
                    sentiment: Sentiment::Bullish,
                    importance: Importance::Medium,
                }],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(dossier_for("sol").is_some());
        assert!(dossier_for("SOL").is_some());
        assert!(dossier_for("DOGE").is_none());
    }

    #[test]
    fn stops_and_targets_bracket_price() {
        for dossier in dossiers() {
            let a = &dossier.analysis;
            assert!(a.stop_loss < dossier.price, "{}", dossier.symbol);
            assert!(a.target_price > dossier.price, "{}", dossier.symbol);
        }
    }

    #[test]
    fn mention_log_total_covers_recent() {
        for dossier in dossiers() {
            assert!(dossier.mentions.total as usize >= dossier.mentions.recent.len());
        }
    }
}
