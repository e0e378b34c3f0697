//! Rates command implementation.
//!
//! This module fetches the requested window of dates and prints one line per
//! date that the upstream answered.

use crate::display::{Format, write_lines};
use anyhow::{Context, Result};
use hryvnia_lib::prelude::*;
use std::io::BufWriter;
use tracing::{info, warn};

/// Fetch and print exchange rates for the query scanned from `tokens`.
pub(crate) async fn rates(tokens: &[String], format: Format, config: ClientConfig) -> Result<()> {
    let query = RateQuery::from_tokens(tokens);
    let concurrency = config.concurrency;
    let client = RateClient::new(config).context("Failed to create HTTP client")?;

    info!(days = %query.days, currencies = %query.filter, "fetching exchange rates");
    let report = rates_for_query(&client, &query, concurrency).await;

    if !report.is_complete() {
        warn!(
            "No exchange rates for {} of {} days",
            report.skipped.len(),
            report.requested()
        );
    }

    let stdout = BufWriter::new(std::io::stdout());
    write_lines(&report.lines, stdout, format).context("Failed to write exchange rates")
}
