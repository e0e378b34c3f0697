//! Parsed upstream exchange rate responses.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::CurrencyCode;

/// A decimal exchange rate.
///
/// The upstream sends rates as JSON numbers, older responses as numeric
/// strings. Both are accepted, and the text as sent is kept for display:
/// `"39.20"` prints as `39.20` and `40` as `40`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    value: f64,
    text: String,
}

impl Rate {
    /// Creates a rate from a float.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }

    /// Parses a rate from numeric text, keeping the trimmed text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a number.
    pub fn parse(text: &str) -> Result<Self, std::num::ParseFloatError> {
        let text = text.trim();
        let value = text.parse::<f64>()?;
        Ok(Self {
            value,
            text: text.to_string(),
        })
    }

    /// Returns the rate as a float.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the rate as the upstream wrote it.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.text.parse::<serde_json::Number>() {
            Ok(number) => number.serialize(serializer),
            Err(_) => serializer.serialize_f64(self.value),
        }
    }
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRate {
            Number(serde_json::Number),
            Text(String),
        }

        match RawRate::deserialize(deserializer)? {
            RawRate::Number(number) => {
                let value = number
                    .as_f64()
                    .ok_or_else(|| de::Error::custom(format!("rate {number} out of range")))?;
                Ok(Self {
                    value,
                    text: number.to_string(),
                })
            }
            RawRate::Text(text) => Self::parse(&text)
                .map_err(|e| de::Error::custom(format!("invalid rate {text:?}: {e}"))),
        }
    }
}

/// One currency's rates within a [`RateRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    /// Currency the rates are quoted against (normally "UAH").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    /// Quoted currency code. Some upstream entries omit it.
    #[serde(default)]
    pub currency: String,
    /// National bank purchase rate. Some upstream entries omit it.
    #[serde(
        default,
        rename = "purchaseRateNB",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_rate_nb: Option<Rate>,
    /// National bank sale rate. Some upstream entries omit it.
    #[serde(default, rename = "saleRateNB", skip_serializing_if = "Option::is_none")]
    pub sale_rate_nb: Option<Rate>,
    /// Commercial purchase rate, when the bank quotes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_rate: Option<Rate>,
    /// Commercial sale rate, when the bank quotes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_rate: Option<Rate>,
}

impl RateEntry {
    /// Returns true if this entry quotes the given currency.
    #[must_use]
    pub fn is(&self, code: &CurrencyCode) -> bool {
        self.currency == code.as_str()
    }

    /// Returns the national bank purchase and sale rates, if both are quoted.
    #[must_use]
    pub const fn nb_rates(&self) -> Option<(&Rate, &Rate)> {
        match (&self.purchase_rate_nb, &self.sale_rate_nb) {
            (Some(buy), Some(sale)) => Some((buy, sale)),
            _ => None,
        }
    }
}

/// One date's parsed upstream response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    /// Date of the rates, as `DD.MM.YYYY`.
    pub date: String,
    /// Reporting bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    /// Numeric ISO code of the base currency (980 for UAH).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<u32>,
    /// Letter code of the base currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency_lit: Option<String>,
    /// Per-currency rate entries, in upstream order.
    #[serde(default)]
    pub exchange_rate: Vec<RateEntry>,
}

impl RateRecord {
    /// Parses a record from a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a well-formed record.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Returns the first entry quoting `code`.
    #[must_use]
    pub fn find(&self, code: &CurrencyCode) -> Option<&RateEntry> {
        self.exchange_rate.iter().find(|entry| entry.is(code))
    }
}
