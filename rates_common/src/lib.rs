//!
//! Common types and services for fetching historical exchange rates.
//!
//! This crate aggregates:
//! - `error` — unified error type `RatesError` used across the workspace.
//! - `result` — handy `Result<T, RatesError>` alias.
//! - `currency` — validated three-letter currency codes.
//! - `query` — a validated (currency, day count) request.
//! - `model` — daily rates handed to callers and the upstream JSON payload.
//! - `source` — the `RateSource` seam and the PrivatBank HTTP client.
//! - `fetcher` — the per-day fetch loop producing a `RateList`.
//! - `net` — endpoint constants and date formatting helpers.
#![warn(missing_docs)]
pub mod currency;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod net;
pub mod query;
pub mod result;
pub mod source;

pub use currency::CurrencyCode;
pub use error::RatesError;
pub use fetcher::RateFetcher;
pub use model::rate::{DailyRate, RateList};
pub use query::Query;
pub use result::Result;
pub use source::{ClientConfig, PrivatBankClient, RateSource};
