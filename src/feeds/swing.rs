use serde_json::Value;

use crate::normalize::{extract_rows, fields, first_text, number_at, text_at, RawRow, UNKNOWN_NAME};
use crate::scorer::rank_desc;
use crate::types::{Direction, SwingTrade};

const SYMBOL: &[&str] = &["Symbol", "Name", "Ticker"];
const DIRECTION: &[&str] = &["Direction", "Side", "direction"];
const TRIGGER: &[&str] = &["Trigger", "TriggerPrice", "Entry"];

/// `LONG`/`BUY`/`BULL…` and `SHORT`/`SELL`/`BEAR…`, case-insensitive.
pub fn parse_direction(text: &str) -> Direction {
    let upper = text.trim().to_ascii_uppercase();
    if upper == "LONG" || upper == "BUY" || upper.contains("BULL") {
        Direction::Long
    } else if upper == "SHORT" || upper == "SELL" || upper.contains("BEAR") {
        Direction::Short
    } else {
        Direction::Unknown
    }
}

pub(crate) fn row_direction(row: &RawRow) -> Direction {
    parse_direction(&text_at(row, DIRECTION))
}

pub(crate) fn row_symbol(row: &RawRow) -> String {
    first_text(row, SYMBOL).unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn swing_trade(row: &RawRow) -> SwingTrade {
    SwingTrade {
        symbol: row_symbol(row),
        direction: row_direction(row),
        setup: text_at(row, &["Setup", "setup"]),
        confidence: number_at(row, fields::CONFIDENCE).clamp(0.0, 100.0),
        trigger: number_at(row, TRIGGER),
        status: text_at(row, &["Status", "status"]).to_ascii_uppercase(),
    }
}

/// Active swing candidates, highest confidence first.
pub fn build_swings(payload: &Value) -> Vec<SwingTrade> {
    let trades: Vec<SwingTrade> = extract_rows(payload).iter().map(swing_trade).collect();
    rank_desc(trades, |t: &SwingTrade| t.confidence)
}
