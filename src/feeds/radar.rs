use serde_json::Value;

use crate::config::CHAMPION_COUNT;
use crate::normalize::{extract_rows, fields, first_text, number_at, text_at, RawRow, UNKNOWN_NAME};
use crate::scorer::rank_and_trim;
use crate::sector::resolve_sector;
use crate::symbols::chart_url_for;
use crate::types::{RadarFeed, RadarStock};

use super::item::resolve_name;

const PEAK_SCORE: &[&str] = &["Peak_Score", "PeakScore"];
const LATEST_SCORE: &[&str] = &["Latest Score", "Latest_Score", "LatestScore"];
const SMART_RANK: &[&str] = &["SmartRank", "Smart_Rank"];

fn radar_stock(row: &RawRow) -> RadarStock {
    let name = resolve_name(row);
    let chart_url = first_text(row, fields::CHART).unwrap_or_else(|| {
        if name == UNKNOWN_NAME {
            String::new()
        } else {
            chart_url_for(&name)
        }
    });

    RadarStock {
        smart_rank: number_at(row, SMART_RANK),
        peak_score: number_at(row, PEAK_SCORE),
        latest_score: number_at(row, LATEST_SCORE),
        signal_score: number_at(row, fields::SIGNAL_SCORE),
        open_interest_change: number_at(row, fields::OI_CHANGE),
        break_label: text_at(row, fields::BREAK),
        confidence: number_at(row, fields::CONFIDENCE),
        sector: resolve_sector(row, &name),
        chart_url,
        name,
    }
}

/// Champions ranking: every row, sorted by peak score (stable), capped at
/// `cap`. The leading entries are repeated as `champions`.
pub fn build_radar(payload: &Value, cap: usize) -> RadarFeed {
    let stocks: Vec<RadarStock> = extract_rows(payload)
        .iter()
        .map(radar_stock)
        .collect();

    let stocks = rank_and_trim(stocks, |s: &RadarStock| s.peak_score, cap);
    let champions = stocks.iter().take(CHAMPION_COUNT).cloned().collect();

    RadarFeed { champions, stocks }
}
