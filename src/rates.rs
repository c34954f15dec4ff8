use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

use jiff::civil::Date;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A 3-letter ISO 4217 currency code, stored uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Base currency of every provider snapshot.
    pub const USD: CurrencyCode = CurrencyCode(*b"USD");
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::Usage(format!(
                "invalid currency code {s:?}: expected a 3-letter code such as EUR"
            )));
        }
        let mut code = [0u8; 3];
        for (dst, src) in code.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(code))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}

/// The snapshot date requested on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateDate {
    /// The provider's most recent rates (the "today" token).
    Latest,
    /// End-of-day rates for one calendar date.
    Historical(Date),
}

impl FromStr for RateDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("today") {
            return Ok(Self::Latest);
        }
        s.parse::<Date>().map(Self::Historical).map_err(|_| {
            Error::Usage(format!(
                "invalid date {s:?}: expected YYYY-MM-DD or \"today\""
            ))
        })
    }
}

impl fmt::Display for RateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Historical(date) => write!(f, "{date}"),
        }
    }
}

#[derive(Deserialize)]
struct RawSnapshot {
    base: String,
    rates: BTreeMap<String, f64>,
}

/// One decoded provider response: every rate is the value of 1 USD in the
/// keyed currency. Immutable once parsed.
#[derive(Debug)]
pub struct RateSnapshot {
    pub base: String,
    pub date: RateDate,
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateSnapshot {
    /// Decode one response body fetched for `date`.
    pub fn parse(date: RateDate, body: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(body)?;
        let mut rates = BTreeMap::new();
        for (code, rate) in raw.rates {
            match code.parse::<CurrencyCode>() {
                Ok(code) => {
                    rates.insert(code, rate);
                }
                // Some payloads carry alternative/metal symbols longer than
                // three letters; they are never addressable from the CLI.
                Err(_) => log::debug!("skipping non-currency rate key {code:?}"),
            }
        }
        // Historical payloads sometimes omit the base identity.
        rates.entry(CurrencyCode::USD).or_insert(1.0);
        Ok(Self {
            base: raw.base,
            date,
            rates,
        })
    }

    /// USD rate of `code`.
    pub fn rate(&self, code: CurrencyCode) -> Result<f64> {
        self.rates
            .get(&code)
            .copied()
            .ok_or(Error::UnknownCurrency(code))
    }

    /// Cross rate from `source` to `target`, or the plain USD rate of
    /// `source` when no target is given.
    pub fn convert(
        &self,
        source: CurrencyCode,
        target: Option<CurrencyCode>,
    ) -> Result<ConversionResult> {
        let source_rate = self.rate(source)?;
        match target {
            Some(target) => Ok(ConversionResult {
                source,
                target,
                rate: self.rate(target)? / source_rate,
            }),
            None => Ok(ConversionResult {
                source: CurrencyCode::USD,
                target: source,
                rate: source_rate,
            }),
        }
    }
}

/// A computed rate and the pair it relates, ready for formatting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionResult {
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: f64,
}
