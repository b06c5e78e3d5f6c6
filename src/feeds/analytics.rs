use serde_json::Value;

use crate::normalize::{as_record, extract_rows, number_at, RawRow};
use crate::types::{AnalyticsMetrics, AnalyticsReport, TradeRecord};

use super::swing::{row_direction, row_symbol};

const RETURN_PCT: &[&str] = &["ReturnPct", "Return_Pct", "returnPct", "Return"];
const HOLD_DAYS: &[&str] = &["HoldDays", "Hold_Days", "holdDays"];

fn trade_record(row: &RawRow) -> TradeRecord {
    TradeRecord {
        symbol: row_symbol(row),
        direction: row_direction(row),
        return_pct: number_at(row, RETURN_PCT),
        hold_days: number_at(row, HOLD_DAYS),
    }
}

/// Metrics recomputed from the execution log.
pub fn derive_metrics(trades: &[TradeRecord]) -> AnalyticsMetrics {
    let n = trades.len();
    if n == 0 {
        return AnalyticsMetrics::default();
    }
    let denom = n as f64;
    let wins = trades.iter().filter(|t| t.return_pct > 0.0).count();
    let best = trades
        .iter()
        .map(|t| t.return_pct)
        .fold(f64::NEG_INFINITY, f64::max);

    AnalyticsMetrics {
        total_trades: denom,
        win_rate: wins as f64 / denom * 100.0,
        avg_return: trades.iter().map(|t| t.return_pct).sum::<f64>() / denom,
        avg_hold: trades.iter().map(|t| t.hold_days).sum::<f64>() / denom,
        best_trade: best,
    }
}

fn upstream_metrics(metrics: &RawRow) -> AnalyticsMetrics {
    AnalyticsMetrics {
        total_trades: number_at(metrics, &["totalTrades", "total_trades"]),
        win_rate: number_at(metrics, &["winRate", "win_rate"]),
        avg_return: number_at(metrics, &["avgReturn", "avg_return"]),
        avg_hold: number_at(metrics, &["avgHold", "avg_hold"]),
        best_trade: number_at(metrics, &["bestTrade", "best_trade"]),
    }
}

/// Swing performance report. Upstream `metrics` are trusted when present as an
/// object; otherwise they are derived from the trade log.
pub fn build_analytics(payload: &Value) -> AnalyticsReport {
    let trade_rows = match payload.get("trades") {
        Some(Value::Array(items)) => items.iter().map(as_record).collect(),
        _ => extract_rows(payload),
    };
    let trades: Vec<TradeRecord> = trade_rows.iter().map(trade_record).collect();

    let metrics = match payload.get("metrics") {
        Some(Value::Object(m)) => upstream_metrics(m),
        _ => derive_metrics(&trades),
    };

    AnalyticsReport { metrics, trades }
}
