pub mod coerce;
pub mod extract;

pub use coerce::{as_record, first_text, number_at, text_at, to_text, RawRow};
pub use extract::extract_rows;

/// Upstream aliases for each canonical field, highest priority first.
pub mod fields {
    pub const NAME: &[&str] = &["Name", "Symbol", "Ticker", "InstrumentKey"];
    pub const PRICE: &[&str] = &["SignalPrice", "Price", "price", "LTP", "lastPrice", "Close"];
    pub const OI_CHANGE: &[&str] = &["OI_Change", "OI", "oi_change", "oi", "OI %"];
    pub const BREAK: &[&str] = &["BreakType", "Break", "Status", "RankType"];
    pub const TIME: &[&str] = &["Time", "SnapshotTime", "Signal_Generated_At"];
    pub const SIGNAL_SCORE: &[&str] = &["Signal_Generated_Score", "SignalScore"];
    pub const SECTOR: &[&str] = &["Sector", "sector", "Industry", "industry"];
    pub const EXCHANGE_SYMBOL: &[&str] = &["TradingSymbol", "tradingSymbol", "InstrumentKey"];
    pub const SYMBOL: &[&str] = &["Symbol", "symbol", "Ticker", "ticker"];
    pub const CHART: &[&str] = &["Chart", "chart"];
    pub const CONFIDENCE: &[&str] = &["Confidence", "confidence"];
}

/// Display name used when no identifier can be recovered from a row.
pub const UNKNOWN_NAME: &str = "UNKNOWN";
