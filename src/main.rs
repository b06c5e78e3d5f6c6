mod api;
mod config;
mod detector;
mod error;
mod feeds;
mod fetcher;
mod normalize;
mod scorer;
mod sector;
mod symbols;
mod types;

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::api::health::HealthState;
use crate::api::latency::LatencyStats;
use crate::api::routes::{router, ApiState};
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::UpstreamClient;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    if cfg.upstream_configured() {
        info!(
            timeout_secs = cfg.upstream_timeout_secs,
            radar_cap = cfg.radar_cap,
            "Upstream configured"
        );
    } else {
        warn!("UPSTREAM_API_URL / RADAR_SECRET not set, every feed will answer with empty results");
    }

    let health = Arc::new(HealthState::new(cfg.upstream_configured()));
    let latency = Arc::new(LatencyStats::new());
    let upstream = UpstreamClient::new(&cfg, health.clone(), latency.clone())?;

    let state = ApiState {
        upstream: Arc::new(upstream),
        health,
        latency,
        radar_cap: cfg.radar_cap,
    };

    let addr = format!("0.0.0.0:{}", cfg.api_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API listening on {addr}");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
