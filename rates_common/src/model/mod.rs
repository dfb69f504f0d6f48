//! Data model types.
//!
//! - `rate` — `DailyRate` and `RateList` returned to callers.
//! - `response` — the JSON payload returned by the exchange-rate service.
pub mod rate;
pub mod response;
