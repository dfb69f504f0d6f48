//! A validated rate query: which currency, and for how many days back.
//!
//! A `Query` can only be built through validation, so the fetcher never sees
//! a day count outside `1..=MAX_DAYS`. Validation happens before any request
//! is made.
use std::num::IntErrorKind;

use crate::currency::CurrencyCode;
use crate::error::RatesError;
use crate::result::Result;

/// Largest number of days a single query may cover.
pub const MAX_DAYS: u8 = 10;

/// Currency and day count for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    currency: CurrencyCode,
    days: u8,
}

impl Query {
    /// Build a query from an already parsed currency and a day count.
    pub fn new(currency: CurrencyCode, days: i64) -> Result<Self> {
        Ok(Query {
            currency,
            days: check_days(days)?,
        })
    }

    /// Build a query from raw console text for both fields.
    ///
    /// The day count is parsed and range-checked first, then the currency.
    pub fn parse(currency: &str, days: &str) -> Result<Self> {
        let days = check_days(parse_days(days)?)?;
        Ok(Query {
            currency: currency.parse::<CurrencyCode>()?,
            days,
        })
    }

    /// Requested currency.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Requested number of days, including today.
    pub fn days(&self) -> u8 {
        self.days
    }
}

/// Parse day-count text as a signed integer, ignoring surrounding whitespace.
///
/// Whole numbers too large for `i64` saturate, so they still fail the range
/// check rather than the integer check.
pub fn parse_days(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(RatesError::InvalidDays(trimmed.to_string())),
    })
}

fn check_days(days: i64) -> Result<u8> {
    if !(1..=i64::from(MAX_DAYS)).contains(&days) {
        return Err(RatesError::DaysOutOfRange(days));
    }
    Ok(days as u8)
}
