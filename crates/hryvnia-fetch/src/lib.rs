//! HTTP client and URL construction for the hryvnia exchange rate tools.
//!
//! This crate provides the fetch side of the rate pipeline:
//!
//! - [`url::exchange_rates_url`] - Builds the upstream query URL for a date
//! - [`RateSource`] - Anything that can turn a URL into a [`RateRecord`]
//! - [`RateClient`] - The reqwest-backed [`RateSource`]
//!
//! [`RateRecord`]: hryvnia_types::RateRecord

#![doc(issue_tracker_base_url = "https://github.com/hryvnia-rs/hryvnia/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, RateClient};
pub use source::RateSource;
