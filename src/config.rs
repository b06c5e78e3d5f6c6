use crate::error::{AppError, Result};

/// Maximum entries kept in each momentum list (bulls / bears).
pub const MOMENTUM_CAP: usize = 20;

/// Number of leading radar stocks surfaced as champions.
pub const CHAMPION_COUNT: usize = 5;

/// Default cap on the full radar list (RADAR_CAP).
pub const DEFAULT_RADAR_CAP: usize = 50;

/// Default upstream request timeout in seconds (UPSTREAM_TIMEOUT_SECS).
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

/// Confidence above which an AI verdict is flagged as high conviction.
pub const HIGH_CONVICTION_THRESHOLD: f64 = 80.0;

/// Sector-strength weights. The breadth term is centered at a 50% bullish
/// ratio and contributes ±15 points for a fully one-sided sector.
pub mod strength_weights {
    pub const OI_WEIGHT: f64 = 0.6;
    pub const BREADTH_CENTER: f64 = 0.5;
    pub const BREADTH_SCALE: f64 = 30.0;
}

/// Upstream `route` query values, one per feed.
pub mod routes {
    pub const MARKET_VELOCITY: &str = "market-velocity";
    pub const SMART_RADAR: &str = "smart-radar";
    pub const SWING_TRADES: &str = "swing-trades";
    pub const AI_SIGNALS: &str = "ai-signals";
    pub const SWING_ANALYTICS: &str = "swing-analytics";
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analytics backend (UPSTREAM_API_URL, falls back to AWS_API_URL).
    /// None ⇒ every feed answers with its empty result.
    pub upstream_url: Option<String>,
    /// Shared secret appended as the `secret` query parameter (RADAR_SECRET).
    pub radar_secret: Option<String>,
    pub log_level: String,
    pub api_port: u16,
    pub upstream_timeout_secs: u64,
    /// Max stocks returned by the radar feed (RADAR_CAP).
    pub radar_cap: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            upstream_url: env_opt("UPSTREAM_API_URL").or_else(|| env_opt("AWS_API_URL")),
            radar_secret: env_opt("RADAR_SECRET"),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .map_err(|_| AppError::Config("API_PORT must be a valid port number".to_string()))?,
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&s| s > 0)
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            radar_cap: std::env::var("RADAR_CAP")
                .ok()
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_RADAR_CAP),
        })
    }

    /// Both the base URL and the secret are required to reach the backend.
    pub fn upstream_configured(&self) -> bool {
        self.upstream_url.is_some() && self.radar_secret.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: None,
            radar_secret: None,
            log_level: "info".to_string(),
            api_port: 3000,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            radar_cap: DEFAULT_RADAR_CAP,
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
