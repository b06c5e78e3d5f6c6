use serde_json::Value;

use super::coerce::{as_record, RawRow};

/// Wrapper keys probed, in order, when the payload is an object.
pub const ROW_WRAPPER_KEYS: &[&str] = &["data", "rows", "items", "result"];

/// Locate the row array in an upstream payload.
///
/// A bare array is used directly. For objects the first wrapper key holding an
/// array wins. Non-object elements become empty records. Any other shape
/// yields no rows.
pub fn extract_rows(payload: &Value) -> Vec<RawRow> {
    if let Value::Array(items) = payload {
        return items.iter().map(as_record).collect();
    }

    let Value::Object(obj) = payload else {
        return Vec::new();
    };

    ROW_WRAPPER_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_array))
        .map(|items| items.iter().map(as_record).collect())
        .unwrap_or_default()
}
