//! Where one day's rates come from.
//!
//! `RateSource` is the seam between the fetch loop and the network. The
//! production implementation, `PrivatBankClient`, issues a blocking GET to the
//! PrivatBank archive endpoint for every call.
use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::error::RatesError;
use crate::model::response::ExchangeRatesResponse;
use crate::net::BASE_URL;
use crate::result::Result;

/// Provider of the full rate table for a single date.
pub trait RateSource {
    /// Returns the service's answer for `date` (formatted `DD.MM.YYYY`).
    ///
    /// A non-200 status must be reported as `RatesError::Service`.
    fn rates_on(&self, date: &str) -> Result<ExchangeRatesResponse>;
}

impl<S: RateSource + ?Sized> RateSource for &S {
    fn rates_on(&self, date: &str) -> Result<ExchangeRatesResponse> {
        (**self).rates_on(date)
    }
}

/// Connection settings for `PrivatBankClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint the `json` and `date` parameters are appended to.
    pub base_url: String,
    /// Overall request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Blocking HTTP client for the PrivatBank archive API.
///
/// The underlying `reqwest` client keeps its connection pool for the lifetime
/// of this value, so consecutive days reuse the same connection.
pub struct PrivatBankClient {
    http: Client,
    base_url: String,
}

impl PrivatBankClient {
    /// Build a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(PrivatBankClient {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for `date`, e.g. `...exchange_rates?json&date=17.10.2026`.
    pub fn url_for(&self, date: &str) -> String {
        format!("{}?json&date={}", self.base_url, date)
    }
}

impl RateSource for PrivatBankClient {
    fn rates_on(&self, date: &str) -> Result<ExchangeRatesResponse> {
        let url = self.url_for(date);
        debug!("GET {}", url);

        let response = self.http.get(&url).header(ACCEPT, "application/json").send()?;
        let status = response.status();
        debug!("{} answered {}", url, status);
        if status != StatusCode::OK {
            return Err(RatesError::Service {
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        Ok(ExchangeRatesResponse::from_slice(&body)?)
    }
}
