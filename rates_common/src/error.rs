//! Error types shared between the library and the console client.
//!
//! `RatesError` separates the failures a user is expected to see (bad input,
//! an upstream status, a currency with no data) from everything else, which
//! the client reports as an unexpected error.
use std::io;

use thiserror::Error;

use crate::query::MAX_DAYS;

/// Unified error type for rate queries.
#[derive(Error, Debug)]
pub enum RatesError {
    /// Day count text could not be parsed as an integer.
    #[error("Number of days must be an integer: {0:?}")]
    InvalidDays(String),

    /// Day count parsed but lies outside `1..=MAX_DAYS`.
    #[error("{}", days_out_of_range(.0))]
    DaysOutOfRange(i64),

    /// Currency text is not a three-letter code.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    /// Upstream answered with a non-200 status.
    #[error("Failed to get exchange rates. Status code: {status}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// No rate was accumulated for the currency after a day's response.
    #[error("No exchange rates found for {currency} in the last {days} days.")]
    NotFound {
        /// Requested currency code.
        currency: String,
        /// Requested day count.
        days: u8,
    },

    /// A matching entry carried no national bank sale rate.
    #[error("Entry for {currency} on {date} has no saleRateNB")]
    MissingRate {
        /// Requested currency code.
        currency: String,
        /// Response date of the offending payload.
        date: String,
    },

    /// Transport level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON document.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Console or socket I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RatesError {
    /// Returns `true` for errors that are part of normal operation: invalid
    /// input, a service status, or missing data. Everything else is unexpected.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            RatesError::InvalidDays(_)
                | RatesError::DaysOutOfRange(_)
                | RatesError::InvalidCurrency(_)
                | RatesError::Service { .. }
                | RatesError::NotFound { .. }
        )
    }
}

fn days_out_of_range(days: &i64) -> String {
    if *days > i64::from(MAX_DAYS) {
        format!("Number of days cannot be more than {}.", MAX_DAYS)
    } else {
        format!("Number of days must be at least 1, got {}.", days)
    }
}
