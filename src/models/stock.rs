use serde::{Deserialize, Serialize};

use super::TickerOverview;

pub const DESCRIPTION_MAX_CHARS: usize = 300;
/// Lowest index still considered when looking for a sentence break.
pub const SENTENCE_SCAN_FLOOR: usize = 200;

/// Display-ready subset of a [`TickerOverview`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedStock {
    pub ticker: String,
    pub company_name: String,
    pub description: String,
    pub market_cap: f64,
    pub market_cap_text: String,
    pub exchange: String,
    pub employees: u64,
    pub website: String,
    pub logo_url: String,
    pub industry: String,
}

pub fn simplify(overview: TickerOverview) -> SimplifiedStock {
    SimplifiedStock {
        market_cap_text: format_market_cap(overview.market_cap),
        description: simplify_description(&overview.description),
        market_cap: overview.market_cap,
        ticker: overview.ticker,
        company_name: overview.name,
        exchange: overview.primary_exchange,
        employees: overview.total_employees,
        website: overview.homepage_url,
        logo_url: overview.branding.logo_url,
        industry: overview.sic_description,
    }
}

pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= 1e12 {
        format!("${:.1}T", market_cap / 1e12)
    } else if market_cap >= 1e9 {
        format!("${:.1}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("${:.1}M", market_cap / 1e6)
    } else if market_cap >= 1e3 {
        format!("${:.1}K", market_cap / 1e3)
    } else {
        format!("${:.0}", market_cap)
    }
}

/// Cuts long descriptions at the last sentence ending in `[200, 299]`,
/// or hard at 300 chars with a trailing `...` when there is none.
pub fn simplify_description(description: &str) -> String {
    let chars: Vec<char> = description.chars().collect();
    if chars.len() <= DESCRIPTION_MAX_CHARS {
        return description.to_string();
    }

    if let Some(end) = (SENTENCE_SCAN_FLOOR..DESCRIPTION_MAX_CHARS)
        .rev()
        .find(|&i| chars[i] == '.')
    {
        return chars[..=end].iter().collect();
    }

    let mut truncated: String = chars[..DESCRIPTION_MAX_CHARS].iter().collect();
    truncated.push_str("...");
    truncated
}
