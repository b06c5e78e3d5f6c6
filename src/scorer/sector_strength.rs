use std::collections::HashMap;

use crate::config::strength_weights::{BREADTH_CENTER, BREADTH_SCALE, OI_WEIGHT};
use crate::types::{SectorBucket, SectorMember};

use super::ranking::rank_desc;

/// Group classified members into sector buckets and rank the buckets.
///
/// Every member lands in exactly one bucket. Buckets are created in
/// first-seen order, members are ordered by descending signal score and
/// buckets by descending strength (stable on ties).
pub fn aggregate_sectors(members: Vec<(String, SectorMember)>) -> Vec<SectorBucket> {
    let mut order: Vec<(String, Vec<SectorMember>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (sector, member) in members {
        match index.get(&sector) {
            Some(&i) => order[i].1.push(member),
            None => {
                index.insert(sector.clone(), order.len());
                order.push((sector, vec![member]));
            }
        }
    }

    let buckets: Vec<SectorBucket> = order
        .into_iter()
        .map(|(name, members)| build_bucket(name, members))
        .collect();

    rank_desc(buckets, |b: &SectorBucket| b.strength)
}

fn build_bucket(name: String, members: Vec<SectorMember>) -> SectorBucket {
    let oi: Vec<f64> = members.iter().map(|m| m.item.open_interest_change).collect();
    let average_oi = average_oi(&oi);
    let bullish_ratio = bullish_ratio(&oi);

    SectorBucket {
        name,
        strength: compute_strength(average_oi, bullish_ratio),
        average_oi,
        bullish_ratio,
        members: rank_desc(members, |m: &SectorMember| m.signal_score),
    }
}

/// Mean OI change; the denominator never drops below 1.
pub fn average_oi(oi: &[f64]) -> f64 {
    oi.iter().sum::<f64>() / oi.len().max(1) as f64
}

/// Fraction of members with a strictly positive OI change.
pub fn bullish_ratio(oi: &[f64]) -> f64 {
    oi.iter().filter(|&&v| v > 0.0).count() as f64 / oi.len().max(1) as f64
}

/// Composite sector strength, rounded to two decimals. Not clamped.
/// Blends capital-flow magnitude (average OI) with participation breadth.
pub fn compute_strength(average_oi: f64, bullish_ratio: f64) -> f64 {
    let raw = average_oi * OI_WEIGHT + (bullish_ratio - BREADTH_CENTER) * BREADTH_SCALE;
    round2(raw)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
