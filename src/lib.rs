pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod rates;

use clap::Parser;

use crate::client::Client;
use crate::config::Config;
use crate::error::Result;
use crate::rates::{CurrencyCode, RateDate, RateSnapshot};

/// Look up foreign exchange rates for a date, or convert between two currencies.
///
/// Rates come from the Open Exchange Rates API and are quoted against USD.
/// Requires an API key in the FX_API_KEY environment variable or a .env file.
#[derive(Parser)]
pub struct Cli {
    /// Snapshot date (format: YYYY-MM-DD), or "today" for the latest rates
    #[arg(value_name = "DATE")]
    pub date: RateDate,
    /// Currency to look up, as a 3-letter code (e.g. EUR)
    #[arg(value_name = "CURRENCY")]
    pub currency: CurrencyCode,
    /// Target currency; when given, prints the CURRENCY to TARGET cross rate
    #[arg(value_name = "TARGET")]
    pub target: Option<CurrencyCode>,

    /// Also print the request date, endpoint, and raw fetched rates
    #[clap(short, long)]
    pub verbose: bool,
}

/// Run one lookup end to end: load the key, fetch the snapshot, convert,
/// print. Exactly one network request is issued.
pub fn run(args: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    let client = Client::new(config.api_key);
    let body = client.fetch(args.date)?;
    let snapshot = RateSnapshot::parse(args.date, &body)?;
    let result = snapshot.convert(args.currency, args.target)?;
    output::print_result(
        &snapshot,
        &result,
        &client.endpoint_url(args.date),
        args.verbose,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use crate::rates::RateDate;

    #[test]
    fn cli_parses_lookup_and_conversion_forms() {
        let args = Cli::parse_from(["fx", "today", "brl"]);
        assert_eq!(args.date, RateDate::Latest);
        assert_eq!(args.currency.to_string(), "BRL");
        assert!(args.target.is_none());
        assert!(!args.verbose);

        let args = Cli::parse_from(["fx", "2024-01-15", "EUR", "BRL", "-v"]);
        assert_eq!(args.date, "2024-01-15".parse().unwrap());
        assert_eq!(args.target.unwrap().to_string(), "BRL");
        assert!(args.verbose);
    }

    #[test]
    fn cli_rejects_bad_tokens() {
        assert!(Cli::try_parse_from(["fx", "someday", "EUR"]).is_err());
        assert!(Cli::try_parse_from(["fx", "today", "EURO"]).is_err());
        assert!(Cli::try_parse_from(["fx", "today", "EUR", "B2L"]).is_err());
    }
}
