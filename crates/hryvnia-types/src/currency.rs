//! Currency codes and the filter of requested currencies.

use serde::{Deserialize, Serialize};

use crate::CurrencyCodeError;

/// Currencies reported when no filter is given, in display order.
pub const DEFAULT_PAIR: [&str; 2] = ["EUR", "USD"];

/// Three-letter upper-case currency code (e.g. "EUR").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code, upper-casing the input.
    ///
    /// # Errors
    ///
    /// Returns an error unless `code` is exactly three ASCII letters.
    pub fn new(code: &str) -> Result<Self, CurrencyCodeError> {
        if code.chars().count() != 3 {
            return Err(CurrencyCodeError::InvalidLength(code.to_string()));
        }
        if !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::NonAlphabetic(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the codes of [`DEFAULT_PAIR`].
    #[must_use]
    pub fn default_pair() -> [Self; 2] {
        DEFAULT_PAIR.map(|code| Self(code.to_string()))
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Requested currencies in first-seen order.
///
/// An empty filter means "the default pair" ([`DEFAULT_PAIR`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyFilter {
    codes: Vec<CurrencyCode>,
}

impl CurrencyFilter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Adds a code, returning false if it was already present.
    pub fn insert(&mut self, code: CurrencyCode) -> bool {
        if self.codes.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    /// Returns true if no code was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the number of requested codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the filter contains the code.
    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.codes.contains(code)
    }

    /// Returns an iterator over the requested codes.
    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyCode> {
        self.codes.iter()
    }
}

impl FromIterator<CurrencyCode> for CurrencyFilter {
    fn from_iter<I: IntoIterator<Item = CurrencyCode>>(iter: I) -> Self {
        let mut filter = Self::new();
        for code in iter {
            filter.insert(code);
        }
        filter
    }
}

impl<'a> IntoIterator for &'a CurrencyFilter {
    type Item = &'a CurrencyCode;
    type IntoIter = std::slice::Iter<'a, CurrencyCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for CurrencyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.codes.is_empty() {
            return write!(f, "{}", DEFAULT_PAIR.join(", "));
        }
        let codes: Vec<&str> = self.codes.iter().map(CurrencyCode::as_str).collect();
        write!(f, "{}", codes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_uppercases() {
        let code = CurrencyCode::new("gbp").unwrap();
        assert_eq!(code.as_str(), "GBP");
        assert_eq!(code, *"GBP");
    }

    #[test]
    fn test_code_rejects_bad_input() {
        assert_eq!(
            CurrencyCode::new("EURO"),
            Err(CurrencyCodeError::InvalidLength("EURO".to_string()))
        );
        assert_eq!(
            CurrencyCode::new("U5D"),
            Err(CurrencyCodeError::NonAlphabetic("U5D".to_string()))
        );
        assert!(CurrencyCode::new("").is_err());
    }

    #[test]
    fn test_code_serde_round_trip_validates() {
        let code: CurrencyCode = serde_json::from_str("\"chf\"").unwrap();
        assert_eq!(code.as_str(), "CHF");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CHF\"");
        assert!(serde_json::from_str::<CurrencyCode>("\"SWISS\"").is_err());
    }

    #[test]
    fn test_default_pair_order() {
        let [first, second] = CurrencyCode::default_pair();
        assert_eq!(first.as_str(), "EUR");
        assert_eq!(second.as_str(), "USD");
    }

    #[test]
    fn test_filter_keeps_first_seen_order_without_duplicates() {
        let filter: CurrencyFilter = ["usd", "pln", "USD", "eur"]
            .into_iter()
            .map(|c| CurrencyCode::new(c).unwrap())
            .collect();
        let codes: Vec<_> = filter.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["USD", "PLN", "EUR"]);
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(CurrencyFilter::new().to_string(), "EUR, USD");
        let filter: CurrencyFilter = [CurrencyCode::new("chf").unwrap()].into_iter().collect();
        assert_eq!(filter.to_string(), "CHF");
    }
}
