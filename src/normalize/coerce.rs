//! Total conversions from untyped upstream scalars.
//!
//! Nothing here fails: every unusable value maps to `0.0`, `""` or an empty record.

use serde_json::{Map, Value};

/// An upstream row with no guaranteed keys.
pub type RawRow = Map<String, Value>;

/// Finite numbers pass through. Strings lose `%`, `+` and `,` and are parsed;
/// anything unparseable or non-finite becomes `0.0`.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, '%' | '+' | ','))
                .collect();
            cleaned
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Trimmed text for strings, empty for everything else.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Objects become records; arrays, scalars and null become an empty record.
pub fn as_record(value: &Value) -> RawRow {
    match value {
        Value::Object(map) => map.clone(),
        _ => RawRow::new(),
    }
}

/// First key whose value is present and not null, in priority order.
/// A present value wins even if it later coerces to zero or empty text.
pub fn pick<'a>(row: &'a RawRow, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .find(|v| !v.is_null())
}

pub fn number_at(row: &RawRow, keys: &[&str]) -> f64 {
    pick(row, keys).map(to_number).unwrap_or(0.0)
}

pub fn text_at(row: &RawRow, keys: &[&str]) -> String {
    pick(row, keys).map(to_text).unwrap_or_default()
}

/// First key whose value yields non-empty text. Unlike [`pick`], a present but
/// empty or non-string value falls through to the next key.
pub fn first_text(row: &RawRow, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .map(to_text)
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> RawRow {
        as_record(&v)
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(to_number(&json!(42)), 42.0);
        assert_eq!(to_number(&json!(-1.25)), -1.25);
    }

    #[test]
    fn strings_are_cleaned_before_parsing() {
        assert_eq!(to_number(&json!("12.5%")), 12.5);
        assert_eq!(to_number(&json!("-3,400")), -3400.0);
        assert_eq!(to_number(&json!("+7.1")), 7.1);
        assert_eq!(to_number(&json!("  2.0 % ")), 2.0);
    }

    #[test]
    fn unusable_values_become_zero() {
        assert_eq!(to_number(&Value::Null), 0.0);
        assert_eq!(to_number(&json!("abc")), 0.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!("inf")), 0.0);
        assert_eq!(to_number(&json!("NaN")), 0.0);
        assert_eq!(to_number(&json!(true)), 0.0);
        assert_eq!(to_number(&json!([1, 2])), 0.0);
        assert_eq!(to_number(&json!({"v": 1})), 0.0);
    }

    #[test]
    fn to_number_is_always_finite() {
        let samples = [
            json!("1e400"),
            json!("-1e400"),
            json!("%%%"),
            json!("1,2,3"),
            json!("0x10"),
            json!(f64::MAX),
            json!("9".repeat(400)),
        ];
        for s in &samples {
            assert!(to_number(s).is_finite(), "non-finite for {s}");
        }
    }

    #[test]
    fn text_is_trimmed_and_non_strings_are_empty() {
        assert_eq!(to_text(&json!("  TCS ")), "TCS");
        assert_eq!(to_text(&json!(12)), "");
        assert_eq!(to_text(&Value::Null), "");
    }

    #[test]
    fn pick_skips_missing_and_null_but_not_empty() {
        let r = row(json!({"A": null, "B": "", "C": "x"}));
        assert_eq!(pick(&r, &["Z", "A", "B", "C"]), Some(&json!("")));
        assert_eq!(text_at(&r, &["A", "B", "C"]), "");
        assert_eq!(first_text(&r, &["A", "B", "C"]).as_deref(), Some("x"));
    }

    #[test]
    fn number_at_uses_first_present_key() {
        let r = row(json!({"OI": "5.2%", "oi": 9}));
        assert_eq!(number_at(&r, &["OI_Change", "OI", "oi"]), 5.2);
        assert_eq!(number_at(&r, &["missing"]), 0.0);
    }
}
