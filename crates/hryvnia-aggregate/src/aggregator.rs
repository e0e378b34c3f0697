//! Fan-out/fan-in over a window of dates.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use hryvnia_fetch::{RateSource, url::exchange_rates_urls};
use hryvnia_format::{FormattedLine, extract};
use hryvnia_types::{CurrencyFilter, DateWindow, RateQuery, format_date};
use tracing::{debug, warn};

/// Result of one aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateReport {
    /// One line per usable date, most recent first.
    pub lines: Vec<FormattedLine>,
    /// Dates that produced no line, most recent first.
    pub skipped: Vec<NaiveDate>,
}

impl RateReport {
    /// Returns true if every date of the window produced a line.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Returns the number of dates that were requested.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.lines.len() + self.skipped.len()
    }
}

/// Fetches and extracts rates for every date of `window`.
///
/// Up to `concurrency` requests run at once; with the default client
/// configuration that covers the whole window. Output follows window order
/// regardless of completion order. Dates whose fetch fails, or whose record
/// lacks the default pair, are logged and listed in [`RateReport::skipped`].
pub async fn collect_rates<S>(
    source: &S,
    window: &DateWindow,
    filter: &CurrencyFilter,
    concurrency: usize,
) -> RateReport
where
    S: RateSource + ?Sized,
{
    let urls = exchange_rates_urls(source.base_url(), window);
    debug!(dates = window.len(), %filter, "fetching exchange rates");

    let outcomes: Vec<_> = stream::iter(window.iter().copied().zip(urls))
        .map(|(date, url)| async move { (date, source.fetch(&url).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut report = RateReport::default();
    for (date, outcome) in outcomes {
        match outcome {
            Ok(record) => match extract(&record, filter) {
                Ok(line) => report.lines.push(line),
                Err(e) => {
                    warn!(date = %format_date(date), error = %e, "skipping exchange rates");
                    report.skipped.push(date);
                }
            },
            // Already logged by the source.
            Err(_) => report.skipped.push(date),
        }
    }
    report
}

/// Runs a [`RateQuery`] over the window ending today.
pub async fn rates_for_query<S>(source: &S, query: &RateQuery, concurrency: usize) -> RateReport
where
    S: RateSource + ?Sized,
{
    let window = DateWindow::ending_today(query.days);
    collect_rates(source, &window, &query.filter, concurrency).await
}
