use crate::normalize::{fields, first_text, RawRow, UNKNOWN_NAME};
use crate::symbols::{compact, resolve_ticker_symbol, strip_corporate_suffixes, strip_exchange_prefix};

use super::tables::{LABEL_KEYWORDS, SECTOR_KEYWORDS, TICKER_SECTORS, UNCLASSIFIED};

/// Lookup forms of an identifier: the compacted text first, then the same text
/// with corporate suffixes removed (so `HINDZINC` is not read as `HINDZ`).
fn lookup_forms(raw: &str) -> Vec<String> {
    let compacted = compact(strip_exchange_prefix(raw));
    if compacted.is_empty() {
        return Vec::new();
    }
    let stripped = strip_corporate_suffixes(&compacted).to_string();
    if stripped == compacted {
        vec![compacted]
    } else {
        vec![compacted, stripped]
    }
}

/// Canonical display-name form used for keyword scanning.
pub fn normalize_name(raw: &str) -> String {
    let compacted = compact(strip_exchange_prefix(raw));
    strip_corporate_suffixes(&compacted).to_string()
}

/// Identifier candidates for a row, highest priority first: the corrected
/// ticker, the exchange-prefixed symbol, a plain symbol field, the display name.
fn identifier_candidates(row: &RawRow, display_name: &str) -> Vec<String> {
    let has_name = !display_name.is_empty() && display_name != UNKNOWN_NAME;
    let mut out = Vec::with_capacity(4);
    if has_name {
        out.push(resolve_ticker_symbol(display_name));
    }
    if let Some(exchange) = first_text(row, fields::EXCHANGE_SYMBOL) {
        out.push(strip_exchange_prefix(&exchange).to_string());
    }
    if let Some(symbol) = first_text(row, fields::SYMBOL) {
        out.push(symbol);
    }
    if has_name {
        out.push(display_name.to_string());
    }
    out
}

/// Exact ticker-table hit for any candidate, in candidate order.
pub fn lookup_ticker(candidates: &[String]) -> Option<&'static str> {
    candidates
        .iter()
        .flat_map(|c| lookup_forms(c))
        .find_map(|form| TICKER_SECTORS.get(form.as_str()).copied())
}

/// First keyword (in declaration order) contained in the compacted text.
pub fn keyword_sector(text: &str) -> Option<&'static str> {
    let normalized = normalize_name(text);
    if normalized.is_empty() {
        return None;
    }
    SECTOR_KEYWORDS
        .iter()
        .find(|(_, keys)| keys.iter().any(|k| normalized.contains(k)))
        .map(|(sector, _)| *sector)
}

fn label_word_matches(word: &str, keyword: &str) -> bool {
    word == keyword || (keyword.len() >= 4 && word.starts_with(keyword))
}

/// Canonical sector for a free-text sector/industry label, matched word by word.
pub fn label_sector(label: &str) -> Option<&'static str> {
    let upper = label.to_ascii_uppercase();
    let words: Vec<&str> = upper
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    LABEL_KEYWORDS
        .iter()
        .find(|(_, keys)| {
            keys.iter()
                .any(|k| words.iter().any(|w| label_word_matches(w, k)))
        })
        .map(|(sector, _)| *sector)
}

/// Resolve the sector bucket for a row.
///
/// Tiers, first hit wins: exact ticker table over the identifier candidates;
/// explicit sector/industry field (canonicalized when one of its words is a
/// known sector word, verbatim otherwise); keyword scan of the display name;
/// the unclassified bucket. Never empty.
pub fn resolve_sector(row: &RawRow, display_name: &str) -> String {
    if let Some(sector) = lookup_ticker(&identifier_candidates(row, display_name)) {
        return sector.to_string();
    }

    if let Some(explicit) = first_text(row, fields::SECTOR) {
        return label_sector(&explicit)
            .map(str::to_string)
            .unwrap_or(explicit);
    }

    if display_name != UNKNOWN_NAME {
        if let Some(sector) = keyword_sector(display_name) {
            return sector.to_string();
        }
    }

    UNCLASSIFIED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::as_record;
    use serde_json::json;

    fn sector_of(v: serde_json::Value) -> String {
        let row = as_record(&v);
        let name = first_text(&row, fields::NAME).unwrap_or_else(|| UNKNOWN_NAME.to_string());
        resolve_sector(&row, &name)
    }

    #[test]
    fn exact_ticker_ignores_case_and_punctuation() {
        assert_eq!(sector_of(json!({"Name": "HDFCBANK"})), "Banking");
        assert_eq!(sector_of(json!({"Name": "hdfc-bank"})), "Banking");
        assert_eq!(sector_of(json!({"Name": "HDFC BANK LTD"})), "Banking");
        assert_eq!(sector_of(json!({"Name": "NSE:HDFCBANK"})), "Banking");
    }

    #[test]
    fn table_beats_explicit_field() {
        let s = sector_of(json!({"Name": "TCS", "Sector": "Services"}));
        assert_eq!(s, "IT");
    }

    #[test]
    fn suffix_like_tickers_still_match() {
        assert_eq!(sector_of(json!({"Name": "HINDZINC"})), "Metals");
    }

    #[test]
    fn long_names_resolve_through_symbol_correction() {
        assert_eq!(sector_of(json!({"Name": "Larsen & Toubro Ltd"})), "Infrastructure");
        assert_eq!(sector_of(json!({"Name": "UltraTech Cement"})), "Cement");
    }

    #[test]
    fn exchange_symbol_field_is_a_candidate() {
        let s = sector_of(json!({"Name": "Some Display Name", "TradingSymbol": "NSE_EQ|SUNPHARMA"}));
        assert_eq!(s, "Pharma");
        let s = sector_of(json!({"Name": "Display", "Symbol": "wipro"}));
        assert_eq!(s, "IT");
    }

    #[test]
    fn explicit_field_is_canonicalized_by_keyword() {
        let s = sector_of(json!({"Name": "NEWCO", "Sector": "Private Sector Banks"}));
        assert_eq!(s, "Banking");
        let s = sector_of(json!({"Name": "NEWCO", "industry": "Healthcare Services"}));
        assert_eq!(s, "Pharma");
    }

    #[test]
    fn labels_match_whole_words_only() {
        let s = sector_of(json!({"Name": "NEWCO", "Sector": "Specialty Chemicals"}));
        assert_eq!(s, "Specialty Chemicals");
        let s = sector_of(json!({"Name": "NEWCO", "Sector": "IT Consulting"}));
        assert_eq!(s, "IT");
        let s = sector_of(json!({"Name": "NEWCO", "Sector": "Agriculture"}));
        assert_eq!(s, "Agriculture");
        let s = sector_of(json!({"Name": "NEWCO", "Industry": "Real Estate"}));
        assert_eq!(s, "Realty");
        let s = sector_of(json!({"Name": "NEWCO", "Sector": "Oil & Gas"}));
        assert_eq!(s, "Energy");
    }

    #[test]
    fn short_label_keywords_are_not_stems() {
        assert_eq!(label_sector("Italian Foods"), Some("FMCG"));
        assert_eq!(label_sector("Oilseeds"), None);
        assert_eq!(label_sector("Banks"), Some("Banking"));
        assert_eq!(label_sector(""), None);
    }

    #[test]
    fn explicit_field_without_keyword_is_kept_verbatim() {
        let s = sector_of(json!({"Name": "NEWCO", "Sector": "  Chemicals "}));
        assert_eq!(s, "Chemicals");
    }

    #[test]
    fn keyword_scan_on_display_name() {
        assert_eq!(sector_of(json!({"Name": "ABC Pharma Ltd"})), "Pharma");
        assert_eq!(sector_of(json!({"Name": "XYZ Steel Works"})), "Metals");
    }

    #[test]
    fn first_declared_keyword_wins() {
        // Contains both BANK (Banking) and FINANC (Financials).
        assert_eq!(keyword_sector("Bank Finance Corp"), Some("Banking"));
    }

    #[test]
    fn unknown_falls_back_to_other() {
        assert_eq!(sector_of(json!({"Name": "ZZZFAKECO"})), "Other");
        assert_eq!(sector_of(json!({})), "Other");
        assert_eq!(sector_of(json!({"Name": "", "Sector": ""})), "Other");
    }
}
