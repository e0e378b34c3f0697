//! Core types for the hryvnia exchange rate tools.
//!
//! This crate provides the value types shared by the fetcher, the formatter,
//! the aggregation pipeline and the chat relay:
//!
//! - [`DayCount`] - Clamped number of trailing days to query
//! - [`DateWindow`] - Most-recent-first list of dates for a day count
//! - [`CurrencyCode`] / [`CurrencyFilter`] - Requested currencies
//! - [`RateQuery`] - Day count and filter scanned from free-form tokens
//! - [`RateRecord`] - One parsed upstream response

#![doc(issue_tracker_base_url = "https://github.com/hryvnia-rs/hryvnia/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod currency;
mod date_window;
mod error;
mod query;
mod record;

pub use currency::{CurrencyCode, CurrencyFilter, DEFAULT_PAIR};
pub use date_window::{DATE_FORMAT, DateWindow, DayCount, format_date};
pub use error::{CurrencyCodeError, HryvniaError, Result};
pub use query::RateQuery;
pub use record::{Rate, RateEntry, RateRecord};
