//! The fetch capability consumed by the aggregation pipeline.

use async_trait::async_trait;
use hryvnia_types::RateRecord;

use crate::{FetchError, url::BASE_URL};

/// Something that can fetch one date's [`RateRecord`] from a URL.
///
/// Implementations own the whole request/response lifecycle of each call and
/// share no mutable state between calls, so any number of fetches may run at
/// once. Failures are logged by the implementation before being returned;
/// callers treat an `Err` as "no record for this date".
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Base URL that per-date query URLs are built from.
    fn base_url(&self) -> &str {
        BASE_URL
    }

    /// Fetches and parses the record behind `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-200 status or a malformed
    /// body. The error has already been logged.
    async fn fetch(&self, url: &str) -> Result<RateRecord, FetchError>;
}
