//! Shared health state for the /health endpoint.
//! Updated by the upstream client after every fetch attempt.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;

use crate::types::Feed;

/// Outcome of the most recent upstream fetch for one feed.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedStatus {
    pub last_fetch_at: Option<DateTime<Utc>>,
    pub last_ok: bool,
    pub rows: usize,
    pub consecutive_failures: u64,
    pub total_failures: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedHealth {
    pub feed: Feed,
    #[serde(flatten)]
    pub status: FeedStatus,
}

/// Per-feed fetch health. Written by the fetcher, read by the API.
pub struct HealthState {
    upstream_configured: bool,
    feeds: DashMap<Feed, FeedStatus>,
}

impl HealthState {
    pub fn new(upstream_configured: bool) -> Self {
        Self {
            upstream_configured,
            feeds: DashMap::new(),
        }
    }

    pub fn upstream_configured(&self) -> bool {
        self.upstream_configured
    }

    pub fn record_success(&self, feed: Feed, rows: usize) {
        let mut status = self.feeds.entry(feed).or_default();
        status.last_fetch_at = Some(Utc::now());
        status.last_ok = true;
        status.rows = rows;
        status.consecutive_failures = 0;
    }

    pub fn record_failure(&self, feed: Feed) {
        let mut status = self.feeds.entry(feed).or_default();
        status.last_fetch_at = Some(Utc::now());
        status.last_ok = false;
        status.rows = 0;
        status.consecutive_failures += 1;
        status.total_failures += 1;
    }

    pub fn status(&self, feed: Feed) -> FeedStatus {
        self.feeds
            .get(&feed)
            .map(|s| s.value().clone())
            .unwrap_or_default()
    }

    /// One entry per feed in a fixed order; never-fetched feeds report defaults.
    pub fn snapshot(&self) -> Vec<FeedHealth> {
        Feed::ALL
            .iter()
            .map(|&feed| FeedHealth {
                feed,
                status: self.status(feed),
            })
            .collect()
    }
}
