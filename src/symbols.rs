//! Ticker correction and chart links for NSE instruments.

use std::collections::HashMap;
use std::sync::LazyLock;

const CHART_BASE_URL: &str = "https://www.tradingview.com/chart/?symbol=NSE:";

/// Compacted display names (see [`compact`]) that differ from the exchange ticker.
static TICKER_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("RELIANCEINDUSTRIES", "RELIANCE"),
        ("STATEBANKOFINDIA", "SBIN"),
        ("SBI", "SBIN"),
        ("INFOSYS", "INFY"),
        ("TATACONSULTANCYSERVICES", "TCS"),
        ("HCLTECHNOLOGIES", "HCLTECH"),
        ("TECHMAHINDRA", "TECHM"),
        ("LARSENTOUBRO", "LT"),
        ("LARSENANDTOUBRO", "LT"),
        ("MAHINDRAMAHINDRA", "M&M"),
        ("MAHINDRAANDMAHINDRA", "M&M"),
        ("MM", "M&M"),
        ("BHARTIAIRTEL", "BHARTIARTL"),
        ("AIRTEL", "BHARTIARTL"),
        ("HINDUSTANUNILEVER", "HINDUNILVR"),
        ("HUL", "HINDUNILVR"),
        ("MARUTISUZUKI", "MARUTI"),
        ("MARUTISUZUKIINDIA", "MARUTI"),
        ("SUNPHARMACEUTICAL", "SUNPHARMA"),
        ("SUNPHARMACEUTICALINDUSTRIES", "SUNPHARMA"),
        ("BAJAJFINANCE", "BAJFINANCE"),
        ("BAJAJFINSERV", "BAJAJFINSV"),
        ("BAJAJAUTO", "BAJAJ-AUTO"),
        ("KOTAKMAHINDRABANK", "KOTAKBANK"),
        ("KOTAK", "KOTAKBANK"),
        ("ULTRATECHCEMENT", "ULTRACEMCO"),
        ("ULTRATECH", "ULTRACEMCO"),
        ("POWERGRID", "POWERGRID"),
        ("POWERGRIDCORPORATIONOFINDIA", "POWERGRID"),
        ("OILNATURALGAS", "ONGC"),
        ("OILANDNATURALGAS", "ONGC"),
        ("DRREDDYSLABORATORIES", "DRREDDY"),
        ("DIVISLABORATORIES", "DIVISLAB"),
        ("EICHERMOTORS", "EICHERMOT"),
        ("HEROMOTO", "HEROMOTOCO"),
        ("TATAMOTORS", "TATAMOTORS"),
        ("ASIANPAINTS", "ASIANPAINT"),
        ("NESTLEINDIA", "NESTLEIND"),
        ("ADANIENTERPRISES", "ADANIENT"),
        ("ADANIPORTS", "ADANIPORTS"),
        ("ADANIPORTSSEZ", "ADANIPORTS"),
        ("JSWSTEEL", "JSWSTEEL"),
        ("HINDALCOINDUSTRIES", "HINDALCO"),
        ("INDIANOILCORPORATION", "IOC"),
        ("INDIANOIL", "IOC"),
        ("BHARATPETROLEUM", "BPCL"),
        ("HINDUSTANPETROLEUM", "HINDPETRO"),
        ("APOLLOHOSPITALS", "APOLLOHOSP"),
        ("APOLLOHOSPITALSENTERPRISE", "APOLLOHOSP"),
        ("BRITANNIAINDUSTRIES", "BRITANNIA"),
        ("TITANCOMPANY", "TITAN"),
        ("GODREJPROPERTIES", "GODREJPROP"),
        ("INTERGLOBEAVIATION", "INDIGO"),
        ("VARUNBEVERAGES", "VBL"),
        ("AVENUESUPERMARTS", "DMART"),
        ("VODAFONEIDEA", "IDEA"),
    ])
});

/// Leading exchange segment prefixes, matched case-insensitively.
const EXCHANGE_PREFIXES: &[&str] = &["NSE_EQ|", "NSE_FO|", "BSE_EQ|", "BSE_FO|", "NSE:", "BSE:", "NFO:"];

/// Remove one leading exchange prefix (`NSE:`, `NSE_EQ|`, ...). Any other text,
/// including colons or pipes elsewhere, is left alone.
pub fn strip_exchange_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();
    EXCHANGE_PREFIXES
        .iter()
        .find_map(|prefix| {
            trimmed
                .get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| trimmed[prefix.len()..].trim())
        })
        .unwrap_or(trimmed)
}

/// Uppercase alphanumerics only.
pub fn compact(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Trailing corporate suffixes, longest first so `LIMITED` is not read as `…ED`.
const CORPORATE_SUFFIXES: &[&str] = &["LIMITED", "CORPORATION", "LTD", "INC", "CORP", "PLC"];

/// Remove trailing corporate suffixes, repeatedly, never down to an empty string.
pub fn strip_corporate_suffixes(compacted: &str) -> &str {
    let mut s = compacted;
    loop {
        let next = CORPORATE_SUFFIXES
            .iter()
            .find_map(|suffix| s.strip_suffix(suffix).filter(|rest| !rest.is_empty()));
        match next {
            Some(rest) => s = rest,
            None => return s,
        }
    }
}

/// Words of `bare` with trailing corporate-suffix words (`Ltd.`, `Corp`) removed,
/// never down to nothing. Suffixes glued to a ticker (`HINDZINC`) are kept.
fn drop_suffix_words(bare: &str) -> Vec<&str> {
    let mut words: Vec<&str> = bare.split_whitespace().collect();
    while words.len() > 1 {
        let last = words[words.len() - 1].trim_end_matches(['.', ',']);
        if !CORPORATE_SUFFIXES.iter().any(|s| last.eq_ignore_ascii_case(s)) {
            break;
        }
        words.pop();
    }
    words
}

/// Best-effort exchange ticker for a display name or symbol.
///
/// Known long names map through the alias table; anything else is returned
/// uppercased with the exchange prefix, trailing corporate-suffix words and
/// whitespace removed, so punctuation that is part of a ticker (`M&M`,
/// `BAJAJ-AUTO`) survives.
pub fn resolve_ticker_symbol(raw: &str) -> String {
    let bare = strip_exchange_prefix(raw);
    let key = compact(bare);
    let key = strip_corporate_suffixes(&key);
    if let Some(ticker) = TICKER_ALIASES.get(key) {
        return (*ticker).to_string();
    }
    drop_suffix_words(bare)
        .concat()
        .trim_end_matches(['.', ','])
        .to_ascii_uppercase()
}

/// TradingView chart link. Empty when no symbol can be derived.
pub fn chart_url_for(name: &str) -> String {
    let symbol = resolve_ticker_symbol(name);
    if symbol.is_empty() {
        return String::new();
    }
    let tv_symbol: String = symbol
        .chars()
        .map(|c| if c == '&' || c == '-' { '_' } else { c })
        .collect();
    format!("{CHART_BASE_URL}{tv_symbol}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_exchange_prefixes() {
        assert_eq!(strip_exchange_prefix("NSE:HDFCBANK"), "HDFCBANK");
        assert_eq!(strip_exchange_prefix("NSE_EQ|TCS"), "TCS");
        assert_eq!(strip_exchange_prefix("INFY"), "INFY");
        assert_eq!(strip_exchange_prefix(" nse:infy "), "infy");
        assert_eq!(strip_exchange_prefix("BSE_EQ|500180"), "500180");
    }

    #[test]
    fn unknown_prefixes_are_kept() {
        assert_eq!(strip_exchange_prefix("ABC:XYZ"), "ABC:XYZ");
        assert_eq!(strip_exchange_prefix("FOO|BAR"), "FOO|BAR");
        assert_eq!(strip_exchange_prefix("M&M"), "M&M");
    }

    #[test]
    fn suffix_words_are_dropped_from_tickers() {
        assert_eq!(resolve_ticker_symbol("HDFC BANK LTD"), "HDFCBANK");
        assert_eq!(resolve_ticker_symbol("Acme Corp., Ltd."), "ACME");
        assert_eq!(resolve_ticker_symbol("HINDZINC"), "HINDZINC");
        assert_eq!(resolve_ticker_symbol("LTD"), "LTD");
        assert_eq!(
            chart_url_for("HDFC Bank Ltd."),
            "https://www.tradingview.com/chart/?symbol=NSE:HDFCBANK"
        );
    }

    #[test]
    fn strips_suffixes_repeatedly() {
        assert_eq!(strip_corporate_suffixes("HDFCBANKLTD"), "HDFCBANK");
        assert_eq!(strip_corporate_suffixes("ACMECORPLIMITED"), "ACME");
        assert_eq!(strip_corporate_suffixes("LTD"), "LTD");
    }

    #[test]
    fn resolves_long_names_through_aliases() {
        assert_eq!(resolve_ticker_symbol("Infosys Ltd"), "INFY");
        assert_eq!(resolve_ticker_symbol("State Bank of India"), "SBIN");
        assert_eq!(resolve_ticker_symbol("Mahindra & Mahindra Limited"), "M&M");
        assert_eq!(resolve_ticker_symbol("NSE:Bajaj Auto"), "BAJAJ-AUTO");
    }

    #[test]
    fn unknown_names_are_uppercased() {
        assert_eq!(resolve_ticker_symbol(" hdfc bank "), "HDFCBANK");
        assert_eq!(resolve_ticker_symbol("bajaj-auto"), "BAJAJ-AUTO");
        assert_eq!(resolve_ticker_symbol(""), "");
    }

    #[test]
    fn chart_urls_use_tradingview_symbols() {
        assert_eq!(
            chart_url_for("M&M"),
            "https://www.tradingview.com/chart/?symbol=NSE:M_M"
        );
        assert_eq!(
            chart_url_for("tcs"),
            "https://www.tradingview.com/chart/?symbol=NSE:TCS"
        );
        assert_eq!(chart_url_for("   "), "");
    }
}
