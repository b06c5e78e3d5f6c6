use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::normalize::{fields, text_at, RawRow};

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").expect("valid clock pattern"));

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Raw time text of a row, from the first present time field.
pub fn row_time_text(row: &RawRow) -> String {
    text_at(row, fields::TIME)
}

/// Orderable score for a snapshot stamp.
///
/// Full timestamps and bare ISO dates score as epoch milliseconds (offset-less
/// values are read as UTC). Otherwise the first `H:MM[:SS]` occurrence scores
/// as seconds since midnight. Returns None when neither form is present.
pub fn time_score(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    parse_epoch_ms(text).or_else(|| parse_clock_secs(text))
}

fn parse_epoch_ms(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn parse_clock_secs(text: &str) -> Option<i64> {
    let caps = CLOCK_RE.captures(text)?;
    let hour: i64 = caps.get(1)?.as_str().parse().ok()?;
    let minute: i64 = caps.get(2)?.as_str().parse().ok()?;
    let second: i64 = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some(hour * 3600 + minute * 60 + second)
}

/// Keep only the rows of the most recent polling cycle.
///
/// Rows without a usable stamp are dropped from consideration. If no row has
/// one, every row is returned unchanged. Otherwise the returned rows share the
/// maximum score and the exact raw time text of the first row reaching it.
pub fn pick_latest_rows(rows: Vec<RawRow>) -> Vec<RawRow> {
    let scored: Vec<(usize, String, i64)> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let raw = row_time_text(row);
            time_score(&raw).map(|score| (i, raw, score))
        })
        .collect();

    let Some((_, latest_raw, latest_score)) = scored
        .iter()
        .fold(None::<&(usize, String, i64)>, |best, cur| match best {
            Some(b) if cur.2 <= b.2 => Some(b),
            _ => Some(cur),
        })
        .cloned()
    else {
        return rows;
    };

    let keep: Vec<usize> = scored
        .into_iter()
        .filter(|(_, raw, score)| *score == latest_score && *raw == latest_raw)
        .map(|(i, _, _)| i)
        .collect();

    rows.into_iter()
        .enumerate()
        .filter(|(i, _)| keep.binary_search(i).is_ok())
        .map(|(_, row)| row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::as_record;
    use serde_json::json;

    fn rows(v: serde_json::Value) -> Vec<RawRow> {
        v.as_array().unwrap().iter().map(as_record).collect()
    }

    #[test]
    fn clock_scores() {
        assert_eq!(time_score("09:15"), Some(9 * 3600 + 15 * 60));
        assert_eq!(time_score("9:05:30"), Some(9 * 3600 + 5 * 60 + 30));
        assert_eq!(time_score("09:45 AM"), Some(9 * 3600 + 45 * 60));
        assert_eq!(time_score("snapshot"), None);
        assert_eq!(time_score(""), None);
    }

    #[test]
    fn iso_scores_as_epoch_millis() {
        let with_offset = time_score("2026-02-20T09:30:00+05:30").unwrap();
        let utc = time_score("2026-02-20T04:00:00Z").unwrap();
        assert_eq!(with_offset, utc);
        assert_eq!(time_score("2026-02-20T04:00:00"), Some(utc));
        assert_eq!(time_score("2026-02-20"), Some(utc - 4 * 3_600_000));
    }

    #[test]
    fn keeps_all_rows_of_latest_clock() {
        let input = rows(json!([
            {"Name": "A", "Time": "09:15"},
            {"Name": "B", "Time": "09:15"},
            {"Name": "C", "Time": "09:10"},
        ]));
        let picked = pick_latest_rows(input);
        let names: Vec<_> = picked.iter().map(|r| r["Name"].clone()).collect();
        assert_eq!(names, vec![json!("A"), json!("B")]);
    }

    #[test]
    fn unparseable_times_fail_open() {
        let input = rows(json!([
            {"Name": "A"},
            {"Name": "B", "Time": "n/a"},
            {"Name": "C", "Time": 930},
        ]));
        let picked = pick_latest_rows(input.clone());
        assert_eq!(picked, input);
    }

    #[test]
    fn rows_without_stamps_are_dropped_once_any_row_has_one() {
        let input = rows(json!([
            {"Name": "A"},
            {"Name": "B", "Time": "10:00"},
        ]));
        let picked = pick_latest_rows(input);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0]["Name"], json!("B"));
    }

    #[test]
    fn equal_score_with_different_label_is_excluded() {
        let input = rows(json!([
            {"Name": "A", "Time": "09:30"},
            {"Name": "B", "Time": "09:30:00"},
            {"Name": "C", "Time": "09:30"},
        ]));
        let picked = pick_latest_rows(input);
        let names: Vec<_> = picked.iter().map(|r| r["Name"].clone()).collect();
        assert_eq!(names, vec![json!("A"), json!("C")]);
    }

    #[test]
    fn falls_back_through_time_fields() {
        let input = rows(json!([
            {"Name": "A", "SnapshotTime": "11:00"},
            {"Name": "B", "Signal_Generated_At": "10:00"},
        ]));
        let picked = pick_latest_rows(input);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0]["Name"], json!("A"));
    }
}
