//! Command-line arguments for the rates client.
//!
//! Every flag is optional. Without flags the client behaves as a plain
//! interactive prompt. See `main` for end-to-end usage.
use clap::Parser;
use rates_common::net::BASE_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Currency code (e.g. USD or EUR). Prompted for when omitted.
    #[clap(long)]
    pub currency: Option<String>,

    /// Number of days to look back, today included (at most 10).
    /// Prompted for when omitted.
    #[clap(long)]
    pub days: Option<String>,

    /// Exchange-rate archive endpoint.
    #[clap(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Give up on a single request after this many seconds.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}
