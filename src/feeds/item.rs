use crate::detector::{classify, row_time_text};
use crate::normalize::{fields, first_text, number_at, text_at, RawRow, UNKNOWN_NAME};
use crate::symbols::chart_url_for;
use crate::types::{MarketItem, Side};

/// Display name from the first non-empty identifier field, else `UNKNOWN`.
pub fn resolve_name(row: &RawRow) -> String {
    first_text(row, fields::NAME).unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Build the canonical item for a row. `forced_side` skips classification
/// (used for lists the upstream has already split into bulls and bears).
pub fn market_item(row: &RawRow, forced_side: Option<Side>) -> MarketItem {
    let name = resolve_name(row);
    let side = forced_side.unwrap_or_else(|| classify(row));
    let chart_url = if name == UNKNOWN_NAME {
        String::new()
    } else {
        chart_url_for(&name)
    };

    MarketItem {
        price: number_at(row, fields::PRICE),
        open_interest_change: number_at(row, fields::OI_CHANGE),
        break_label: text_at(row, fields::BREAK),
        side,
        timestamp: row_time_text(row),
        chart_url,
        name,
    }
}
