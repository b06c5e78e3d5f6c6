use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::health::HealthState;
use crate::api::latency::LatencyStats;
use crate::config::Config;
use crate::error::Result;
use crate::normalize::extract_rows;
use crate::types::Feed;

/// Client for the analytics backend.
///
/// Every failure (missing configuration, transport error, non-2xx status,
/// empty or unparseable body) degrades to `Value::Null`, which the feed
/// builders turn into empty results.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: Option<String>,
    secret: Option<String>,
    health: Arc<HealthState>,
    latency: Arc<LatencyStats>,
}

impl UpstreamClient {
    pub fn new(cfg: &Config, health: Arc<HealthState>, latency: Arc<LatencyStats>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.upstream_url.clone(),
            secret: cfg.radar_secret.clone(),
            health,
            latency,
        })
    }

    pub async fn fetch(&self, feed: Feed, date: &str) -> Value {
        let (Some(base), Some(secret)) = (self.base_url.as_deref(), self.secret.as_deref()) else {
            debug!(feed = %feed, "upstream not configured, serving empty feed");
            return Value::Null;
        };

        let route = feed.upstream_route();
        let Some(url) = request_url(base, route, date, secret) else {
            warn!(feed = %feed, base, "upstream base URL is not a valid URL");
            self.health.record_failure(feed);
            return Value::Null;
        };

        let started = Instant::now();
        let result = self.get_json(url).await;
        self.latency.record(started.elapsed());

        match result {
            Some(payload) => {
                let rows = extract_rows(&payload).len();
                debug!(feed = %feed, route, date, rows, "upstream fetch ok");
                self.health.record_success(feed, rows);
                payload
            }
            None => {
                self.health.record_failure(feed);
                Value::Null
            }
        }
    }

    async fn get_json(&self, url: Url) -> Option<Value> {
        let resp = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("upstream request failed: {e}");
                return None;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "upstream returned non-success status");
            return None;
        }

        let body = match resp.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!("upstream body read failed: {e}");
                return None;
            }
        };
        parse_body(&body)
    }
}

/// `<base>?route=<route>&date=<date>&secret=<secret>`, preserving any query
/// already present on the base URL.
pub fn request_url(base: &str, route: &str, date: &str, secret: &str) -> Option<Url> {
    let mut url = Url::parse(base.trim()).ok()?;
    url.query_pairs_mut()
        .append_pair("route", route)
        .append_pair("date", date)
        .append_pair("secret", secret);
    Some(url)
}

fn parse_body(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        debug!("upstream returned an empty body");
        return None;
    }
    match serde_json::from_str(trimmed) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("upstream body is not JSON: {e}");
            None
        }
    }
}
