use serde::{Deserialize, Deserializer};

/// Ticker overview record as returned by `GET /v3/reference/tickers/{ticker}`.
///
/// Fields the provider omits or sends as `null` decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TickerOverview {
    #[serde(deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market: String,
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_exchange: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub ticker_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cik: String,
    #[serde(deserialize_with = "null_as_default")]
    pub composite_figi: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_class_figi: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sic_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sic_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ticker_root: String,
    #[serde(deserialize_with = "null_as_default")]
    pub homepage_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_employees: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub list_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branding: Branding,
    #[serde(deserialize_with = "null_as_default")]
    pub share_class_shares_outstanding: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub weighted_shares_outstanding: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub address1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Branding {
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_url: String,
}

/// Response wrapper around a single overview record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverviewEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(default)]
    pub results: Option<TickerOverview>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default)]
    pub next_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
