//! Interactive prompts and result printing.
//!
//! Reading and writing go through `BufRead`/`Write` so the flow can be driven
//! from memory in tests as well as from the terminal.
use std::io::{BufRead, Write};

use rates_common::{Query, RateList, RatesError, Result};

/// Prompt shown before reading the currency code.
pub const CURRENCY_PROMPT: &str = "Enter currency (USD or EUR): ";
/// Prompt shown before reading the day count.
pub const DAYS_PROMPT: &str = "Enter number of days (not more than 10): ";

/// Print `prompt` and read one line of answer without its line ending.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Build a query, prompting for any value not already given on the command line.
pub fn read_query<R: BufRead, W: Write>(
    currency: Option<String>,
    days: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<Query> {
    let currency = match currency {
        Some(currency) => currency,
        None => ask(input, output, CURRENCY_PROMPT)?,
    };
    let days = match days {
        Some(days) => days,
        None => ask(input, output, DAYS_PROMPT)?,
    };
    Query::parse(&currency, &days)
}

/// Print the collected rates under a heading, one `date: rate` line each.
pub fn print_rates<W: Write>(output: &mut W, query: &Query, rates: &RateList) -> Result<()> {
    writeln!(
        output,
        "Exchange rates for {} for the last {} days:",
        query.currency(),
        query.days()
    )?;
    for rate in rates {
        writeln!(output, "{}", rate)?;
    }
    Ok(())
}

/// Print an error the way the user should see it.
pub fn print_error<W: Write>(output: &mut W, err: &RatesError) -> Result<()> {
    if err.is_expected() {
        writeln!(output, "Error: {}", err)?;
    } else {
        writeln!(output, "Unexpected error: {}", err)?;
    }
    Ok(())
}
