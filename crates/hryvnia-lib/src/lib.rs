//! Historical hryvnia exchange rates from the PrivatBank archive API.
//!
//! This is a facade crate that re-exports functionality from the hryvnia
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use hryvnia_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RateClient::with_defaults()?;
//!     let query = RateQuery::from_tokens(["3", "eur", "pln"]);
//!
//!     let report = rates_for_query(&client, &query, client.config().concurrency).await;
//!     for line in &report.lines {
//!         println!("{line}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/hryvnia-rs/hryvnia/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use hryvnia_types::*;

// Re-export fetch functionality
pub use hryvnia_fetch::{ClientConfig, FetchError, RateClient, RateSource, url};

// Re-export extraction and formatters
pub use hryvnia_format::{
    ExtractError, FormatError, FormattedLine, Formatter, JsonFormatter, JsonStyle, Quote,
    TextFormatter, extract,
};

// Re-export aggregation
pub use hryvnia_aggregate::{RateReport, collect_rates, rates_for_query};

// Re-export the chat relay
#[cfg(feature = "chat")]
pub use hryvnia_chat::{ChatHub, ChatServer, Command, Peer, ServerConfig, serve, serve_listener};

/// Prelude module for convenient imports.
///
/// ```
/// use hryvnia_lib::prelude::*;
/// ```
pub mod prelude {
    pub use hryvnia_types::{
        CurrencyCode, CurrencyFilter, DateWindow, DayCount, HryvniaError, RateQuery, RateRecord,
        Result,
    };

    pub use hryvnia_fetch::{ClientConfig, RateClient, RateSource};

    pub use hryvnia_format::{FormattedLine, Formatter, JsonFormatter, TextFormatter};

    pub use hryvnia_aggregate::{RateReport, collect_rates, rates_for_query};

    #[cfg(feature = "chat")]
    pub use hryvnia_chat::{ChatServer, ServerConfig};
}
