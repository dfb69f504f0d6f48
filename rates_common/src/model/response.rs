//! JSON payload of the `exchange_rates` archive endpoint.
//!
//! Only `date` and `exchangeRate` are required. Entries for some currencies
//! carry national bank rates only, so every rate field is optional.
use serde::Deserialize;

/// One day's answer from the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRatesResponse {
    /// Date the rates apply to, as `DD.MM.YYYY`.
    pub date: String,
    /// Bank identifier (e.g. `PB`).
    #[serde(default)]
    pub bank: Option<String>,
    /// Numeric code of the base currency.
    #[serde(default)]
    pub base_currency: Option<u32>,
    /// Literal code of the base currency (e.g. `UAH`).
    #[serde(default)]
    pub base_currency_lit: Option<String>,
    /// Rates for every currency quoted on that date.
    pub exchange_rate: Vec<RateEntry>,
}

/// Rates for a single currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    /// Base currency the rates are quoted in.
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Currency code. The base currency entry may omit it.
    #[serde(default)]
    pub currency: Option<String>,
    /// National bank sale rate.
    #[serde(default, rename = "saleRateNB")]
    pub sale_rate_nb: Option<f64>,
    /// National bank purchase rate.
    #[serde(default, rename = "purchaseRateNB")]
    pub purchase_rate_nb: Option<f64>,
    /// Commercial sale rate, quoted for a few major currencies only.
    #[serde(default)]
    pub sale_rate: Option<f64>,
    /// Commercial purchase rate, quoted for a few major currencies only.
    #[serde(default)]
    pub purchase_rate: Option<f64>,
}

impl ExchangeRatesResponse {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}
