use serde_json::Value;

use crate::normalize::{extract_rows, fields, number_at};
use crate::scorer::aggregate_sectors;
use crate::sector::resolve_sector;
use crate::types::{SectorBucket, SectorMember};

use super::item::market_item;

/// Sector heat view: every row resolved to exactly one sector, aggregated and
/// ranked by strength. Radar rows carry per-stock signal times, so no snapshot
/// filtering is applied.
pub fn build_sectors(payload: &Value) -> Vec<SectorBucket> {
    let rows = extract_rows(payload);

    let members: Vec<(String, SectorMember)> = rows
        .iter()
        .map(|row| {
            let item = market_item(row, None);
            let sector = resolve_sector(row, &item.name);
            let member = SectorMember {
                signal_score: number_at(row, fields::SIGNAL_SCORE),
                item,
            };
            (sector, member)
        })
        .collect();

    aggregate_sectors(members)
}
