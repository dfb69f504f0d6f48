//! Endpoint constants and date helpers for the PrivatBank archive API.

use chrono::{Days, NaiveDate};

/// Archive endpoint returning the rates for a single date.
pub const BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// Date layout expected by the `date` query parameter, e.g. `17.10.2026`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format a calendar date the way the service expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formatted dates for offsets `0..days` counting back from `today`,
/// most recent first.
pub fn requested_dates(today: NaiveDate, days: u8) -> Vec<String> {
    (0..u64::from(days))
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(format_date)
        .collect()
}
