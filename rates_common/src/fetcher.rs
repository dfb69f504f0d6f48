//! Per-day fetch loop.
//!
//! For a query of `n` days the fetcher asks its `RateSource` for today, then
//! yesterday, and so on, one request at a time. Each response is scanned for
//! the requested currency and the national bank sale rate is collected.
//!
//! Failure handling:
//! - any error from the source (a non-200 status, transport, JSON) aborts the
//!   whole query and later days are not requested;
//! - after every day, if nothing has been collected yet, the query fails with
//!   `RatesError::NotFound`. A currency missing on the first day therefore
//!   fails the query even when later days would have matched.
use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::error::RatesError;
use crate::model::rate::{DailyRate, RateList};
use crate::model::response::ExchangeRatesResponse;
use crate::net::requested_dates;
use crate::query::Query;
use crate::result::Result;
use crate::source::RateSource;

/// Collects daily rates from a `RateSource`.
pub struct RateFetcher<S> {
    source: S,
}

impl<S: RateSource> RateFetcher<S> {
    /// Wrap a rate source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch rates counting back from the local calendar date.
    pub fn fetch(&self, query: &Query) -> Result<RateList> {
        self.fetch_since(query, Local::now().date_naive())
    }

    /// Fetch rates counting back from `today`.
    pub fn fetch_since(&self, query: &Query, today: NaiveDate) -> Result<RateList> {
        let currency = query.currency().as_str();
        let days = query.days();
        info!("Fetching {} rates for {} days starting {}", currency, days, today);

        let mut rates = RateList::new();
        for date in requested_dates(today, days) {
            let response = self.source.rates_on(&date)?;
            collect_matches(&response, currency, usize::from(days), &mut rates)?;

            if rates.is_empty() {
                info!("No {} rate in the answer for {}; aborting", currency, date);
                return Err(RatesError::NotFound {
                    currency: currency.to_string(),
                    days,
                });
            }
        }
        Ok(rates)
    }
}

/// Append every entry for `currency` in `response`, never growing `rates`
/// beyond `cap` entries.
fn collect_matches(
    response: &ExchangeRatesResponse,
    currency: &str,
    cap: usize,
    rates: &mut RateList,
) -> Result<()> {
    for entry in &response.exchange_rate {
        if entry.currency.as_deref() != Some(currency) || rates.len() >= cap {
            continue;
        }
        let rate = entry.sale_rate_nb.ok_or_else(|| RatesError::MissingRate {
            currency: currency.to_string(),
            date: response.date.clone(),
        })?;
        debug!("{} {} = {}", response.date, currency, rate);
        rates.push(DailyRate::new(response.date.clone(), rate));
    }
    Ok(())
}
