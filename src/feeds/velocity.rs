use serde_json::Value;
use tracing::debug;

use crate::config::MOMENTUM_CAP;
use crate::detector::{bias_from_counts, pick_latest_rows, row_time_text};
use crate::normalize::{as_record, extract_rows, to_text, RawRow};
use crate::scorer::rank_and_trim;
use crate::types::{MarketItem, Side, VelocitySnapshot};

use super::item::market_item;

/// Normalize a market-velocity payload.
///
/// A payload that already carries `bulls`/`bears` is re-validated member by
/// member; anything else goes through the raw-row pipeline.
pub fn build_velocity(payload: &Value) -> VelocitySnapshot {
    if let Some(snapshot) = normalize_precomputed(payload) {
        debug!(
            bulls = snapshot.bulls.len(),
            bears = snapshot.bears.len(),
            "velocity payload precomputed upstream"
        );
        return snapshot;
    }
    from_rows(extract_rows(payload))
}

fn momentum_list(items: Vec<MarketItem>) -> Vec<MarketItem> {
    rank_and_trim(items, |i: &MarketItem| i.open_interest_change, MOMENTUM_CAP)
}

/// Trust an upstream bull/bear split. None when neither key is present.
fn normalize_precomputed(payload: &Value) -> Option<VelocitySnapshot> {
    let obj = payload.as_object()?;
    if !obj.contains_key("bulls") && !obj.contains_key("bears") {
        return None;
    }

    let forced = |key: &str, side: Side| -> Vec<MarketItem> {
        let items = obj
            .get(key)
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .map(|v| market_item(&as_record(v), Some(side)))
                    .collect()
            })
            .unwrap_or_default();
        momentum_list(items)
    };

    let bulls = forced("bulls", Side::Bullish);
    let bears = forced("bears", Side::Bearish);

    let bias = obj
        .get("bias")
        .map(to_text)
        .and_then(|b| Side::from_label(&b))
        .unwrap_or_else(|| bias_from_counts(bulls.len(), bears.len()));

    let as_of = obj
        .get("asOf")
        .map(to_text)
        .filter(|s| !s.is_empty());

    Some(VelocitySnapshot { bias, bulls, bears, as_of })
}

fn from_rows(rows: Vec<RawRow>) -> VelocitySnapshot {
    let latest = pick_latest_rows(rows);

    let as_of = latest
        .iter()
        .map(row_time_text)
        .find(|t| !t.is_empty());

    let (bulls, bears): (Vec<MarketItem>, Vec<MarketItem>) = latest
        .iter()
        .map(|row| market_item(row, None))
        .filter(|item| item.side != Side::Neutral)
        .partition(|item| item.side == Side::Bullish);

    let bulls = momentum_list(bulls);
    let bears = momentum_list(bears);

    VelocitySnapshot {
        bias: bias_from_counts(bulls.len(), bears.len()),
        bulls,
        bears,
        as_of,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn latest_snapshot_only() {
        let payload = json!([
            {"Name": "TCS", "OI": "5.2%", "Side": "BULLISH", "Time": "09:30"},
            {"Name": "TCS", "OI": "5.2%", "Side": "BULLISH", "Time": "09:15"},
        ]);
        let snap = build_velocity(&payload);
        assert_eq!(snap.bulls.len(), 1);
        assert_eq!(snap.bulls[0].name, "TCS");
        assert_eq!(snap.bulls[0].open_interest_change, 5.2);
        assert!(snap.bears.is_empty());
        assert_eq!(snap.bias, Side::Bullish);
        assert_eq!(snap.as_of.as_deref(), Some("09:30"));
    }

    #[test]
    fn wrapped_rows_split_and_sorted() {
        let payload = json!({"data": [
            {"Name": "A", "OI": 1, "BreakType": "PDH", "Time": "10:00"},
            {"Name": "B", "OI": 7, "RankType": "TOP GAINER", "Time": "10:00"},
            {"Name": "C", "OI": 3, "Side": "bearish", "Time": "10:00"},
            {"Name": "D", "OI": 9, "Time": "10:00"},
        ]});
        let snap = build_velocity(&payload);
        let bulls: Vec<_> = snap.bulls.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(bulls, vec!["B", "A"]);
        assert_eq!(snap.bears.len(), 1);
        assert_eq!(snap.bias, Side::Bullish);
    }

    #[test]
    fn equal_counts_lean_bearish() {
        let payload = json!([
            {"Name": "A", "Side": "BULL"},
            {"Name": "B", "Side": "BEAR"},
        ]);
        let snap = build_velocity(&payload);
        assert_eq!(snap.bias, Side::Bearish);
        assert!(snap.as_of.is_none());
    }

    #[test]
    fn lists_are_capped() {
        let rows: Vec<_> = (0..30)
            .map(|i| json!({"Name": format!("S{i}"), "OI": i, "Side": "BULLISH"}))
            .collect();
        let snap = build_velocity(&Value::Array(rows));
        assert_eq!(snap.bulls.len(), MOMENTUM_CAP);
        assert_eq!(snap.bulls[0].open_interest_change, 29.0);
    }

    #[test]
    fn precomputed_shape_is_trusted_and_revalidated() {
        let payload = json!({
            "bias": "bearish",
            "bulls": [{"Name": "A", "OI": "2%", "Side": "BEARISH"}, {"Name": "B", "OI": 5}],
            "bears": [{"Symbol": "C", "OI_Change": -4}],
            "asOf": " 11:45 ",
        });
        let snap = build_velocity(&payload);
        assert_eq!(snap.bias, Side::Bearish);
        assert_eq!(snap.bulls[0].name, "B");
        assert!(snap.bulls.iter().all(|i| i.side == Side::Bullish));
        assert_eq!(snap.bears[0].side, Side::Bearish);
        assert_eq!(snap.as_of.as_deref(), Some("11:45"));
    }

    #[test]
    fn precomputed_invalid_bias_is_recomputed() {
        let payload = json!({"bias": "SIDEWAYS", "bulls": [{"Name": "A"}, {"Name": "B"}], "bears": "oops"});
        let snap = build_velocity(&payload);
        assert_eq!(snap.bias, Side::Bullish);
        assert!(snap.bears.is_empty());
        assert!(snap.as_of.is_none());
    }

    #[test]
    fn garbage_payload_is_empty_neutral() {
        let empty = VelocitySnapshot {
            bias: Side::Neutral,
            bulls: Vec::new(),
            bears: Vec::new(),
            as_of: None,
        };
        assert_eq!(build_velocity(&Value::Null), empty);
        assert_eq!(build_velocity(&json!({"unexpected": true})), empty);
    }
}
