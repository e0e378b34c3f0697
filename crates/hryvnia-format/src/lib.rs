//! Rate extraction and output formatters for the hryvnia exchange rate tools.
//!
//! - [`extract`] - Pulls the requested currencies out of a [`RateRecord`]
//!   into a [`FormattedLine`]
//! - [`TextFormatter`] - One human-readable line per date
//! - [`JsonFormatter`] - JSON array or NDJSON
//!
//! [`RateRecord`]: hryvnia_types::RateRecord

#![doc(issue_tracker_base_url = "https://github.com/hryvnia-rs/hryvnia/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod extract;
mod formatter;
mod json;
mod text;

pub use extract::{ExtractError, FormattedLine, Quote, SEPARATOR, extract};
pub use formatter::{FormatError, Formatter};
pub use json::{JsonFormatter, JsonStyle};
pub use text::TextFormatter;
