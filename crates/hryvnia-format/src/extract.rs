//! Extracting requested currencies from a rate record.

use hryvnia_types::{CurrencyCode, CurrencyFilter, Rate, RateEntry, RateRecord};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Separator between the date and each quote of a rendered line.
pub const SEPARATOR: &str = " --- ";

/// Buy and sale rate of one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Quoted currency.
    pub code: CurrencyCode,
    /// National bank purchase rate.
    pub buy: Rate,
    /// National bank sale rate.
    pub sale: Rate,
}

impl Quote {
    /// Builds a quote from an entry carrying both national bank rates.
    fn from_entry(code: &CurrencyCode, entry: &RateEntry) -> Option<Self> {
        let (buy, sale) = entry.nb_rates()?;
        Some(Self {
            code: code.clone(),
            buy: buy.clone(),
            sale: sale.clone(),
        })
    }
}

/// Looks up the first entry for `code` that quotes both national bank rates.
fn quote(record: &RateRecord, code: &CurrencyCode) -> Option<Quote> {
    record
        .exchange_rate
        .iter()
        .filter(|entry| entry.is(code))
        .find_map(|entry| Quote::from_entry(code, entry))
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: buy: {}, sale: {}", self.code, self.buy, self.sale)
    }
}

/// One date's quotes, rendered as
/// `01.06.2024 --- EUR: buy: 39.2, sale: 39.9 --- USD: buy: 36.1, sale: 36.8`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedLine {
    /// Date of the quotes, as reported by the upstream.
    pub date: String,
    /// Quotes in request order.
    pub quotes: Vec<Quote>,
}

impl std::fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.date)?;
        for quote in &self.quotes {
            write!(f, "{SEPARATOR}{quote}")?;
        }
        Ok(())
    }
}

/// Errors that make a whole record unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A currency of the default pair is absent from the record.
    #[error("{code} missing from exchange rates for {date}")]
    DefaultPairMissing {
        /// Date of the record.
        date: String,
        /// The absent currency.
        code: CurrencyCode,
    },
}

/// Extracts the quotes requested by `filter` from `record`.
///
/// With a non-empty filter each code is looked up in turn; codes the record
/// does not quote are logged and left out of the line. With an empty filter
/// the default pair (EUR then USD) is required.
///
/// # Errors
///
/// Returns [`ExtractError::DefaultPairMissing`] if the filter is empty and
/// the record lacks EUR or USD.
pub fn extract(record: &RateRecord, filter: &CurrencyFilter) -> Result<FormattedLine, ExtractError> {
    let quotes = if filter.is_empty() {
        CurrencyCode::default_pair()
            .into_iter()
            .map(|code| {
                quote(record, &code).ok_or_else(|| ExtractError::DefaultPairMissing {
                    date: record.date.clone(),
                    code,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        filter
            .iter()
            .filter_map(|code| {
                let quote = quote(record, code);
                if quote.is_none() {
                    warn!(currency = %code, date = %record.date, "currency not found");
                }
                quote
            })
            .collect()
    };

    Ok(FormattedLine {
        date: record.date.clone(),
        quotes,
    })
}
