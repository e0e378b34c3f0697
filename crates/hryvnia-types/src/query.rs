//! Scanning free-form tokens into a rate query.

use crate::date_window::is_numeric;
use crate::{CurrencyCode, CurrencyFilter, DayCount};

/// What to fetch: how many trailing days, and for which currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateQuery {
    /// Number of trailing days including today.
    pub days: DayCount,
    /// Requested currencies; empty means the default pair.
    pub filter: CurrencyFilter,
}

impl RateQuery {
    /// Creates a query from its parts.
    #[must_use]
    pub const fn new(days: DayCount, filter: CurrencyFilter) -> Self {
        Self { days, filter }
    }

    /// Scans positional tokens into a query.
    ///
    /// A token made only of digits sets the day count (the last one wins).
    /// A three-letter alphabetic token is upper-cased and added to the
    /// filter. Every other token is ignored.
    ///
    /// ```
    /// use hryvnia_types::RateQuery;
    ///
    /// let query = RateQuery::from_tokens(["3", "gbp", "latest", "12"]);
    /// assert_eq!(query.days.get(), 10);
    /// assert_eq!(query.filter.to_string(), "GBP");
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Self::default();
        for token in tokens {
            let token = token.as_ref();
            if is_numeric(token) {
                query.days = DayCount::from_token(token);
            } else if let Ok(code) = CurrencyCode::new(token) {
                query.filter.insert(code);
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_give_defaults() {
        let query = RateQuery::from_tokens(Vec::<String>::new());
        assert_eq!(query.days, DayCount::MIN);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn test_last_numeric_token_wins() {
        let query = RateQuery::from_tokens(["5", "2"]);
        assert_eq!(query.days.get(), 2);
    }

    #[test]
    fn test_numeric_tokens_are_clamped() {
        assert_eq!(RateQuery::from_tokens(["0"]).days.get(), 1);
        assert_eq!(RateQuery::from_tokens(["25"]).days.get(), 10);
    }

    #[test]
    fn test_currency_tokens_are_collected() {
        let query = RateQuery::from_tokens(["eur", "4", "Pln", "exchange", "US", "usd1"]);
        let codes: Vec<_> = query.filter.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["EUR", "PLN"]);
        assert_eq!(query.days.get(), 4);
    }

    #[test]
    fn test_negative_numbers_are_ignored() {
        let query = RateQuery::from_tokens(["3", "-7"]);
        assert_eq!(query.days.get(), 3);
    }
}
