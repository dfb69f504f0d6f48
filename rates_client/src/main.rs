//! Rates Client — prints PrivatBank national bank sale rates for a currency over
//! the last few days. It asks for a currency code and a day count (at most 10),
//! fetches one archive page per day counting back from today, and prints one
//! `date: rate` line per day.
//!
//! Usage example (CLI):
//! ```bash
//! rates_client
//! rates_client --currency eur --days 5
//! RUST_LOG=debug rates_client --currency usd --days 3 --timeout-secs 10
//! ```
//!
//! Input mistakes, service statuses and missing data are printed as
//! `Error: ...`; anything else as `Unexpected error: ...`.
#![warn(missing_docs)]
mod args;
mod console;

use crate::args::Args;
use clap::Parser;
use log::{debug, error};
use rates_common::{ClientConfig, PrivatBankClient, Query, RateFetcher, RateList, Result};
use std::io::{self, Write};
use std::time::Duration;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    debug!("{:?}", args);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let query = match console::read_query(args.currency, args.days, &mut input, &mut output) {
        Ok(query) => query,
        Err(e) => {
            console::print_error(&mut output, &e)?;
            return Ok(());
        }
    };

    let config = ClientConfig {
        base_url: args.base_url,
        timeout: args.timeout_secs.map(Duration::from_secs),
    };
    match fetch_rates(config, &query) {
        Ok(rates) => console::print_rates(&mut output, &query, &rates)?,
        Err(e) => {
            if !e.is_expected() {
                error!("Query for {} failed: {:?}", query.currency(), e);
            }
            console::print_error(&mut output, &e)?;
        }
    }
    output.flush()?;
    Ok(())
}

fn fetch_rates(config: ClientConfig, query: &Query) -> Result<RateList> {
    let fetcher = RateFetcher::new(PrivatBankClient::new(config)?);
    fetcher.fetch(query)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
