//! Intelligence feeds: stream digest, social posts, consensus signals.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IntelFeed {
    pub stream: StreamDigest,
    pub gems: Vec<StreamGem>,
    pub posts: Vec<SocialPost>,
    pub consensus: Vec<ConsensusSignal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamDigest {
    pub title: String,
    pub duration: String,
    pub status: StreamStatus,
    pub gems_found: u32,
    pub avg_performance: f64,
    pub recorded: String,
    pub viewer_count: u32,
    pub top_gem: TopGem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamStatus {
    Live,
    Processing,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopGem {
    pub token: String,
    pub performance: f64,
}

/// A call pulled out of the livestream transcript.
#[derive(Debug, Clone, Serialize)]
pub struct StreamGem {
    pub token: String,
    pub quote: String,
    pub timestamp: String,
    pub confidence: u8,
    pub performance: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialPost {
    pub account: String,
    pub content: String,
    pub posted: String,
    pub likes: u32,
    pub reposts: u32,
    pub comments: u32,
    pub tokens: Vec<String>,
    /// 0.0–1.0 bullishness.
    pub sentiment: f64,
    pub confidence: u8,
}

/// A cross-source synthesis: stream + social + session + technicals.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusSignal {
    pub token: String,
    pub call: SignalCall,
    pub confidence: u8,
    pub sources: Vec<String>,
    pub reasoning: String,
    pub timeframe: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCall {
    StrongBuy,
    Buy,
    Hold,
    Sell,
}

impl SignalCall {
    pub fn label(self) -> &'static str {
        match self {
            SignalCall::StrongBuy => "STRONG BUY",
            SignalCall::Buy => "BUY",
            SignalCall::Hold => "HOLD",
            SignalCall::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

pub fn intel_feed() -> IntelFeed {
    IntelFeed {
        stream: StreamDigest {
            title: "Seoul Session Exploding — Desk Calls Running Hot".to_string(),
            duration: "3h 12m".to_string(),
            status: StreamStatus::Processing,
            gems_found: 8,
            avg_performance: 24.7,
            recorded: "1h 23m ago".to_string(),
            viewer_count: 12_567,
            top_gem: TopGem { token: "PEPE".to_string(), performance: 34.2 },
        },
        gems: vec![
            StreamGem {
                token: "PEPE".to_string(),
                quote: "PEPE is absolutely flying — the Seoul session is doing the heavy lifting."
                    .to_string(),
                timestamp: "1:23:45".to_string(),
                confidence: 96,
                performance: 23.4,
                rating: 9.8,
            },
            StreamGem {
                token: "WIF".to_string(),
                quote: "WIF following PEPE perfectly — this is the meme rotation we mapped out."
                    .to_string(),
                timestamp: "2:45:12".to_string(),
                confidence: 89,
                performance: 18.9,
                rating: 9.1,
            },
            StreamGem {
                token: "BONK".to_string(),
                quote: "BONK breaking out exactly as drawn — Seoul traders pressing the bid."
                    .to_string(),
                timestamp: "2:58:30".to_string(),
                confidence: 87,
                performance: 15.2,
                rating: 8.9,
            },
        ],
        posts: vec![
            SocialPost {
                account: "@desk_signals".to_string(),
                content: "Seoul session going vertical. PEPE, WIF, BONK all moving exactly as \
                          mapped — this is why we track the overnight flow."
                    .to_string(),
                posted: "12 minutes ago".to_string(),
                likes: 2_847,
                reposts: 892,
                comments: 234,
                tokens: ["PEPE", "WIF", "BONK"].map(String::from).to_vec(),
                sentiment: 0.95,
                confidence: 94,
            },
            SocialPost {
                account: "@desk_signals".to_string(),
                content: "SOL above the +15% channel band with Seoul support behind it — \
                          continuation setup, targets loading."
                    .to_string(),
                posted: "28 minutes ago".to_string(),
                likes: 1_923,
                reposts: 445,
                comments: 167,
                tokens: vec!["SOL".to_string()],
                sentiment: 0.88,
                confidence: 91,
            },
            SocialPost {
                account: "@desk_research".to_string(),
                content: "UNI social metrics going parabolic. Indicators aligning — could be \
                          the next runner out of this rotation."
                    .to_string(),
                posted: "45 minutes ago".to_string(),
                likes: 1_456,
                reposts: 334,
                comments: 89,
                tokens: vec!["UNI".to_string()],
                sentiment: 0.85,
                confidence: 88,
            },
        ],
        consensus: vec![
            ConsensusSignal {
                token: "PEPE".to_string(),
                call: SignalCall::StrongBuy,
                confidence: 96,
                sources: ["stream", "social", "session", "technical"]
                    .map(String::from)
                    .to_vec(),
                reasoning: "Every source agrees: stream mega-bullish, social momentum, Seoul \
                            pump, technical breakout."
                    .to_string(),
                timeframe: "1H-4H".to_string(),
                urgency: Urgency::High,
            },
            ConsensusSignal {
                token: "SOL".to_string(),
                call: SignalCall::Buy,
                confidence: 94,
                sources: ["stream", "social", "technical", "market"]
                    .map(String::from)
                    .to_vec(),
                reasoning: "Above the +15% band with Seoul support and a bullish market \
                            structure behind it."
                    .to_string(),
                timeframe: "1H-1D".to_string(),
                urgency: Urgency::Medium,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_sections_are_populated() {
        let feed = intel_feed();
        assert_eq!(feed.gems.len(), 3);
        assert_eq!(feed.posts.len(), 3);
        assert_eq!(feed.consensus.len(), 2);
        assert_eq!(feed.stream.top_gem.token, "PEPE");
    }

    #[test]
    fn consensus_urgency_orders_sensibly() {
        let feed = intel_feed();
        assert_eq!(feed.consensus[0].urgency, Urgency::High);
        assert!(feed.consensus[0].confidence >= feed.consensus[1].confidence);
    }

    #[test]
    fn sentiment_is_normalized() {
        for post in intel_feed().posts {
            assert!((0.0..=1.0).contains(&post.sentiment));
        }
    }
}
