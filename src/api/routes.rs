use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::health::{FeedHealth, HealthState};
use crate::api::latency::{LatencyStats, LatencySummary};
use crate::feeds::{
    build_ai_signals, build_analytics, build_radar, build_sectors, build_swings, build_velocity,
};
use crate::fetcher::UpstreamClient;
use crate::types::{
    AiSignal, AnalyticsReport, Feed, RadarFeed, SectorBucket, SwingTrade, VelocitySnapshot,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct ApiState {
    pub upstream: Arc<UpstreamClient>,
    pub health: Arc<HealthState>,
    pub latency: Arc<LatencyStats>,
    pub radar_cap: usize,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/velocity", get(get_velocity))
        .route("/api/sector", get(get_sector))
        .route("/api/radar", get(get_radar))
        .route("/api/swing", get(get_swing))
        .route("/api/ai-signals", get(get_ai_signals))
        .route("/api/analytics", get(get_analytics))
        .route("/health", get(get_health))
        .route("/stats/latency", get(get_stats_latency))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Query params
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Requested trading date as `YYYY-MM-DD`. Missing or malformed values fall
/// back to today (UTC).
pub fn resolve_date(raw: Option<&str>) -> String {
    let today = || Utc::now().date_naive().format(DATE_FORMAT).to_string();
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => today(),
        Some(s) => match NaiveDate::parse_from_str(s, DATE_FORMAT) {
            Ok(d) => d.format(DATE_FORMAT).to_string(),
            Err(_) => {
                warn!(date = s, "invalid date parameter, using today");
                today()
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct HealthResponse {
    pub upstream_configured: bool,
    pub feeds: Vec<FeedHealth>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn fetch_feed(state: &ApiState, feed: Feed, query: &DateQuery) -> serde_json::Value {
    let date = resolve_date(query.date.as_deref());
    info!(feed = %feed, date = %date, "serving feed");
    state.upstream.fetch(feed, &date).await
}

async fn get_velocity(
    State(state): State<ApiState>,
    Query(params): Query<DateQuery>,
) -> Json<VelocitySnapshot> {
    let payload = fetch_feed(&state, Feed::Velocity, &params).await;
    Json(build_velocity(&payload))
}

async fn get_sector(
    State(state): State<ApiState>,
    Query(params): Query<DateQuery>,
) -> Json<Vec<SectorBucket>> {
    let payload = fetch_feed(&state, Feed::Sector, &params).await;
    Json(build_sectors(&payload))
}

async fn get_radar(
    State(state): State<ApiState>,
    Query(params): Query<DateQuery>,
) -> Json<RadarFeed> {
    let payload = fetch_feed(&state, Feed::Radar, &params).await;
    Json(build_radar(&payload, state.radar_cap))
}

async fn get_swing(
    State(state): State<ApiState>,
    Query(params): Query<DateQuery>,
) -> Json<Vec<SwingTrade>> {
    let payload = fetch_feed(&state, Feed::Swing, &params).await;
    Json(build_swings(&payload))
}

async fn get_ai_signals(
    State(state): State<ApiState>,
    Query(params): Query<DateQuery>,
) -> Json<Vec<AiSignal>> {
    let payload = fetch_feed(&state, Feed::AiSignals, &params).await;
    Json(build_ai_signals(&payload))
}

async fn get_analytics(
    State(state): State<ApiState>,
    Query(params): Query<DateQuery>,
) -> Json<AnalyticsReport> {
    let payload = fetch_feed(&state, Feed::Analytics, &params).await;
    Json(build_analytics(&payload))
}

async fn get_health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        upstream_configured: state.health.upstream_configured(),
        feeds: state.health.snapshot(),
    })
}

async fn get_stats_latency(State(state): State<ApiState>) -> Json<LatencySummary> {
    Json(state.latency.summary())
}
