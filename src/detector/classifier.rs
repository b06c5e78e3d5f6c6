use crate::normalize::{text_at, RawRow};
use crate::types::Side;

/// One step of the side fallback chain: if the text found under `keys`
/// contains `needle` (case-insensitive), the row is `side`.
struct SideRule {
    keys: &'static [&'static str],
    needle: &'static str,
    side: Side,
}

const SIDE_KEYS: &[&str] = &["Side", "side"];
const RANK_TYPE_KEYS: &[&str] = &["RankType", "rankType"];
const BREAK_TYPE_KEYS: &[&str] = &["BreakType", "breakType"];

/// Evaluated top to bottom; the first matching rule decides.
const SIDE_RULES: &[SideRule] = &[
    SideRule { keys: SIDE_KEYS, needle: "BULL", side: Side::Bullish },
    SideRule { keys: SIDE_KEYS, needle: "BEAR", side: Side::Bearish },
    SideRule { keys: RANK_TYPE_KEYS, needle: "TOP GAINER", side: Side::Bullish },
    SideRule { keys: RANK_TYPE_KEYS, needle: "TOP LOSER", side: Side::Bearish },
    // Prior-day high breakout / prior-day low breakdown.
    SideRule { keys: BREAK_TYPE_KEYS, needle: "PDH", side: Side::Bullish },
    SideRule { keys: BREAK_TYPE_KEYS, needle: "PDL", side: Side::Bearish },
];

/// Classify a row as bullish, bearish or neutral.
/// Explicit side beats rank type, rank type beats break type; no match is NEUTRAL.
pub fn classify(row: &RawRow) -> Side {
    SIDE_RULES
        .iter()
        .find(|rule| text_at(row, rule.keys).to_ascii_uppercase().contains(rule.needle))
        .map(|rule| rule.side)
        .unwrap_or(Side::Neutral)
}

/// Overall bias of a split snapshot: more bulls ⇒ BULLISH, otherwise BEARISH,
/// NEUTRAL only when both lists are empty.
pub fn bias_from_counts(bulls: usize, bears: usize) -> Side {
    if bulls + bears == 0 {
        Side::Neutral
    } else if bulls > bears {
        Side::Bullish
    } else {
        Side::Bearish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::as_record;
    use serde_json::json;

    fn classify_json(v: serde_json::Value) -> Side {
        classify(&as_record(&v))
    }

    #[test]
    fn explicit_side_overrides_break_type() {
        let side = classify_json(json!({"Side": "strong bullish", "BreakType": "PDL"}));
        assert_eq!(side, Side::Bullish);
    }

    #[test]
    fn lowercase_side_key_is_accepted() {
        assert_eq!(classify_json(json!({"side": "Bearish"})), Side::Bearish);
    }

    #[test]
    fn rank_type_used_when_side_is_blank() {
        let side = classify_json(json!({"Side": "  ", "RankType": "Top Loser (F&O)"}));
        assert_eq!(side, Side::Bearish);
        assert_eq!(classify_json(json!({"rankType": "TOP GAINER"})), Side::Bullish);
    }

    #[test]
    fn break_type_alone() {
        assert_eq!(classify_json(json!({"BreakType": "PDH"})), Side::Bullish);
        assert_eq!(classify_json(json!({"breakType": "pdl break"})), Side::Bearish);
    }

    #[test]
    fn unrelated_side_text_falls_through() {
        let side = classify_json(json!({"Side": "FLAT", "BreakType": "PDH retest"}));
        assert_eq!(side, Side::Bullish);
    }

    #[test]
    fn no_fields_is_neutral() {
        assert_eq!(classify_json(json!({})), Side::Neutral);
        assert_eq!(classify_json(json!({"Side": 1, "BreakType": null})), Side::Neutral);
    }

    #[test]
    fn bias_counts() {
        assert_eq!(bias_from_counts(0, 0), Side::Neutral);
        assert_eq!(bias_from_counts(3, 1), Side::Bullish);
        assert_eq!(bias_from_counts(2, 2), Side::Bearish);
        assert_eq!(bias_from_counts(0, 1), Side::Bearish);
    }
}
