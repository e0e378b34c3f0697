//! Concurrent historical rate aggregation for the hryvnia exchange rate tools.
//!
//! [`collect_rates`] fetches every date of a [`DateWindow`] at once, extracts
//! the requested currencies and hands back the lines in window order.
//!
//! [`DateWindow`]: hryvnia_types::DateWindow

#![doc(issue_tracker_base_url = "https://github.com/hryvnia-rs/hryvnia/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;

pub use aggregator::{RateReport, collect_rates, rates_for_query};
