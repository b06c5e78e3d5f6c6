use serde::{Deserialize, Serialize};

use crate::config::routes;

// ---------------------------------------------------------------------------
// Side / bias
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Bullish,
    Bearish,
    Neutral,
}

impl Side {
    /// Exact (case-insensitive) match on one of the three labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "BULLISH" => Some(Side::Bullish),
            "BEARISH" => Some(Side::Bearish),
            "NEUTRAL" => Some(Side::Neutral),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical per-instrument record
// ---------------------------------------------------------------------------

/// Field names follow the dashboard's JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: f64,
    /// Signed open-interest change in percent.
    #[serde(rename = "OI")]
    pub open_interest_change: f64,
    #[serde(rename = "Break")]
    pub break_label: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(rename = "Time")]
    pub timestamp: String,
    #[serde(rename = "Chart")]
    pub chart_url: String,
}

// ---------------------------------------------------------------------------
// Sector view
// ---------------------------------------------------------------------------

/// A market item plus the signal-confidence score used to order it inside its sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorMember {
    #[serde(flatten)]
    pub item: MarketItem,
    #[serde(rename = "Signal_Generated_Score")]
    pub signal_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBucket {
    pub name: String,
    pub strength: f64,
    #[serde(rename = "avgOi")]
    pub average_oi: f64,
    #[serde(rename = "bullRatio")]
    pub bullish_ratio: f64,
    #[serde(rename = "stocks")]
    pub members: Vec<SectorMember>,
}

// ---------------------------------------------------------------------------
// Velocity view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocitySnapshot {
    pub bias: Side,
    pub bulls: Vec<MarketItem>,
    pub bears: Vec<MarketItem>,
    #[serde(rename = "asOf")]
    pub as_of: Option<String>,
}

// ---------------------------------------------------------------------------
// Radar view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarStock {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SmartRank")]
    pub smart_rank: f64,
    #[serde(rename = "Peak_Score")]
    pub peak_score: f64,
    #[serde(rename = "Latest Score")]
    pub latest_score: f64,
    #[serde(rename = "Signal_Generated_Score")]
    pub signal_score: f64,
    #[serde(rename = "OI")]
    pub open_interest_change: f64,
    #[serde(rename = "Break")]
    pub break_label: String,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Chart")]
    pub chart_url: String,
    #[serde(rename = "Sector")]
    pub sector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarFeed {
    pub champions: Vec<RadarStock>,
    pub stocks: Vec<RadarStock>,
}

// ---------------------------------------------------------------------------
// Swing / AI verdicts / analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingTrade {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Direction")]
    pub direction: Direction,
    #[serde(rename = "Setup")]
    pub setup: String,
    /// Percent, clamped to [0, 100].
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Trigger")]
    pub trigger: f64,
    #[serde(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSignal {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Decision")]
    pub decision: String,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Target")]
    pub target: f64,
    #[serde(rename = "StopLoss")]
    pub stop_loss: f64,
    #[serde(rename = "RiskReward")]
    pub risk_reward: String,
    #[serde(rename = "Reason")]
    pub reason: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "HighConviction")]
    pub high_conviction: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Direction")]
    pub direction: Direction,
    #[serde(rename = "ReturnPct")]
    pub return_pct: f64,
    #[serde(rename = "HoldDays")]
    pub hold_days: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    pub total_trades: f64,
    pub win_rate: f64,
    pub avg_return: f64,
    pub avg_hold: f64,
    pub best_trade: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub metrics: AnalyticsMetrics,
    pub trades: Vec<TradeRecord>,
}

// ---------------------------------------------------------------------------
// Feed identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    Velocity,
    Radar,
    Sector,
    Swing,
    AiSignals,
    Analytics,
}

impl Feed {
    pub const ALL: [Feed; 6] = [
        Feed::Velocity,
        Feed::Radar,
        Feed::Sector,
        Feed::Swing,
        Feed::AiSignals,
        Feed::Analytics,
    ];

    /// Upstream `route` parameter. The sector view is aggregated from radar rows.
    pub fn upstream_route(self) -> &'static str {
        match self {
            Feed::Velocity => routes::MARKET_VELOCITY,
            Feed::Radar | Feed::Sector => routes::SMART_RADAR,
            Feed::Swing => routes::SWING_TRADES,
            Feed::AiSignals => routes::AI_SIGNALS,
            Feed::Analytics => routes::SWING_ANALYTICS,
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Feed::Velocity => "velocity",
            Feed::Radar => "radar",
            Feed::Sector => "sector",
            Feed::Swing => "swing",
            Feed::AiSignals => "ai_signals",
            Feed::Analytics => "analytics",
        };
        write!(f, "{s}")
    }
}
