use std::collections::HashMap;
use std::sync::LazyLock;

pub const BANKING: &str = "Banking";
pub const FINANCIALS: &str = "Financials";
pub const IT: &str = "IT";
pub const AUTO: &str = "Auto";
pub const PHARMA: &str = "Pharma";
pub const METALS: &str = "Metals";
pub const ENERGY: &str = "Energy";
pub const FMCG: &str = "FMCG";
pub const REALTY: &str = "Realty";
pub const INFRASTRUCTURE: &str = "Infrastructure";
pub const CEMENT: &str = "Cement";
pub const TELECOM: &str = "Telecom";
pub const CONSUMER: &str = "Consumer";
pub const AVIATION: &str = "Aviation";

/// Bucket for rows no tier could classify.
pub const UNCLASSIFIED: &str = "Other";

/// Exact ticker → sector. Keys are compacted NSE tickers (uppercase alphanumerics).
pub static TICKER_SECTORS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let groups: &[(&str, &[&str])] = &[
        (
            BANKING,
            &[
                "HDFCBANK", "ICICIBANK", "SBIN", "KOTAKBANK", "AXISBANK", "INDUSINDBK",
                "BANKBARODA", "PNB", "CANBK", "FEDERALBNK", "IDFCFIRSTB", "AUBANK",
                "BANDHANBNK", "UNIONBANK", "INDIANB", "RBLBANK", "YESBANK",
            ],
        ),
        (
            FINANCIALS,
            &[
                "BAJFINANCE", "BAJAJFINSV", "HDFCLIFE", "SBILIFE", "ICICIPRULI", "ICICIGI",
                "CHOLAFIN", "MUTHOOTFIN", "SHRIRAMFIN", "PFC", "RECLTD", "LICHSGFIN",
                "MANAPPURAM", "SBICARD", "HDFCAMC", "ANGELONE", "BSE", "MCX", "CDSL", "LICI",
                "JIOFIN", "POLICYBZR", "PAYTM",
            ],
        ),
        (
            IT,
            &[
                "TCS", "INFY", "WIPRO", "HCLTECH", "TECHM", "LTIM", "MPHASIS", "PERSISTENT",
                "COFORGE", "LTTS", "OFSS", "KPITTECH", "TATAELXSI", "NAUKRI",
            ],
        ),
        (
            AUTO,
            &[
                "MARUTI", "TATAMOTORS", "MM", "BAJAJAUTO", "EICHERMOT", "HEROMOTOCO",
                "TVSMOTOR", "ASHOKLEY", "BHARATFORG", "MOTHERSON", "BOSCHLTD", "MRF",
                "BALKRISIND", "EXIDEIND", "TIINDIA",
            ],
        ),
        (
            PHARMA,
            &[
                "SUNPHARMA", "DRREDDY", "CIPLA", "DIVISLAB", "LUPIN", "AUROPHARMA",
                "BIOCON", "TORNTPHARM", "ALKEM", "ZYDUSLIFE", "GLENMARK", "IPCALAB",
                "LAURUSLABS", "GRANULES", "APOLLOHOSP", "MAXHEALTH", "FORTIS",
            ],
        ),
        (
            METALS,
            &[
                "TATASTEEL", "JSWSTEEL", "HINDALCO", "VEDL", "SAIL", "JINDALSTEL",
                "NMDC", "NATIONALUM", "HINDZINC", "HINDCOPPER", "APLAPOLLO",
            ],
        ),
        (
            ENERGY,
            &[
                "RELIANCE", "ONGC", "IOC", "BPCL", "HINDPETRO", "GAIL", "NTPC",
                "POWERGRID", "TATAPOWER", "ADANIGREEN", "ADANIPOWER", "COALINDIA",
                "PETRONET", "OIL", "IGL", "MGL", "NHPC", "JSWENERGY", "TORNTPOWER",
            ],
        ),
        (
            FMCG,
            &[
                "HINDUNILVR", "ITC", "NESTLEIND", "BRITANNIA", "DABUR", "MARICO",
                "COLPAL", "GODREJCP", "TATACONSUM", "UBL", "UNITDSPR", "VBL",
            ],
        ),
        (
            REALTY,
            &["DLF", "GODREJPROP", "OBEROIRLTY", "PRESTIGE", "LODHA", "PHOENIXLTD"],
        ),
        (
            INFRASTRUCTURE,
            &[
                "LT", "ADANIENT", "ADANIPORTS", "RVNL", "IRCTC", "IRFC", "NBCC", "BEL",
                "HAL", "BHEL", "SIEMENS", "ABB", "CONCOR", "GMRAIRPORT",
            ],
        ),
        (
            CEMENT,
            &["ULTRACEMCO", "SHREECEM", "AMBUJACEM", "ACC", "DALBHARAT", "GRASIM"],
        ),
        (TELECOM, &["BHARTIARTL", "IDEA", "INDUSTOWER", "TATACOMM"]),
        (
            CONSUMER,
            &[
                "TITAN", "TRENT", "DMART", "ASIANPAINT", "BERGEPAINT", "PIDILITIND",
                "HAVELLS", "VOLTAS", "DIXON", "PAGEIND", "JUBLFOOD", "ZOMATO", "NYKAA",
            ],
        ),
        (AVIATION, &["INDIGO"]),
    ];

    groups
        .iter()
        .flat_map(|(sector, tickers)| tickers.iter().map(move |t| (*t, *sector)))
        .collect()
});

/// Keyword → sector for display names, scanned in declaration order; the first
/// substring hit on the compacted name wins. Includes ticker fragments, so it is
/// never applied to free-text sector labels.
pub const SECTOR_KEYWORDS: &[(&str, &[&str])] = &[
    (BANKING, &["BANK", "HDFC", "ICICI", "KOTAK", "SBIN", "AXIS"]),
    (FINANCIALS, &["FINANC", "INSURANCE", "BROKING", "MUTHOOT", "NBFC", "CAPITALMARKET"]),
    (IT, &["INFY", "TCS", "WIPRO", "TECH", "SOFTWARE", "HCL", "INFORMATION"]),
    (AUTO, &["MOTOR", "AUTO", "MARUTI", "BAJAJAUTO", "EICHER", "TYRE"]),
    (PHARMA, &["PHARMA", "HEALTH", "HOSPITAL", "LAB", "CIPLA", "LUPIN", "BIOCON", "DRREDDY"]),
    (METALS, &["STEEL", "METAL", "MINING", "HINDALCO", "VEDL", "SAIL", "JSW"]),
    (ENERGY, &["POWER", "ENERGY", "OIL", "GAS", "ONGC", "IOC", "NTPC", "PETRO"]),
    (FMCG, &["FMCG", "HINDUNILVR", "ITC", "NESTLE", "DABUR", "MARICO", "COLPAL"]),
    (REALTY, &["REALTY", "REALESTATE", "PROPERT", "DLF"]),
    (INFRASTRUCTURE, &["INFRA", "CONSTRUCTION", "LARSEN", "LT", "ADANI", "RAIL", "RVNL", "NBCC"]),
    (CEMENT, &["CEMENT", "CEM"]),
    (TELECOM, &["AIRTEL", "IDEA", "TELECOM", "COMMUNICATION", "JIO"]),
    (CONSUMER, &["CONSUMER", "RETAIL", "TITAN", "TRENT", "DMART", "VBL", "BRITANNIA"]),
    (AVIATION, &["AVIATION", "AIRLINE", "INDIGO"]),
];

/// Descriptive words → sector for upstream sector/industry labels, scanned in
/// declaration order against the label's words. Words of four or more letters
/// also match as stems (`BANK` matches `BANKS`); shorter ones only exactly.
pub const LABEL_KEYWORDS: &[(&str, &[&str])] = &[
    (BANKING, &["BANK"]),
    (FINANCIALS, &["FINANC", "INSURANCE", "NBFC", "BROKING", "BROKERAGE"]),
    (IT, &["IT", "SOFTWARE", "TECHNOLOG", "COMPUTER"]),
    (AUTO, &["AUTO", "VEHICLE", "TYRE", "TYRES"]),
    (PHARMA, &["PHARMA", "HEALTH", "HOSPITAL", "DRUG", "MEDIC"]),
    (METALS, &["METAL", "STEEL", "MINING", "ALUMINIUM"]),
    (ENERGY, &["ENERGY", "POWER", "OIL", "GAS", "PETRO", "UTILIT"]),
    (FMCG, &["FMCG", "FOOD", "BEVERAGE", "TOBACCO", "STAPLES"]),
    (REALTY, &["REALTY", "REAL", "ESTATE", "PROPERT"]),
    (INFRASTRUCTURE, &["INFRA", "CONSTRUCT"]),
    (CEMENT, &["CEMENT"]),
    (TELECOM, &["TELECOM", "COMMUNICATION"]),
    (CONSUMER, &["CONSUMER", "RETAIL", "DURABLE"]),
    (AVIATION, &["AVIATION", "AIRLINE"]),
];
