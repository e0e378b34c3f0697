//! Upstream URL construction.

use chrono::NaiveDate;
use hryvnia_types::{DateWindow, format_date};

/// Base URL of the PrivatBank archive exchange rate endpoint.
pub const BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// Builds the URL for one date's exchange rates.
///
/// URL format: `{base_url}?date={DD}.{MM}.{YYYY}`
///
/// # Example
///
/// ```
/// use hryvnia_fetch::url::{BASE_URL, exchange_rates_url};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let url = exchange_rates_url(BASE_URL, date);
/// assert_eq!(url, "https://api.privatbank.ua/p24api/exchange_rates?date=01.06.2024");
/// ```
#[must_use]
pub fn exchange_rates_url(base_url: &str, date: NaiveDate) -> String {
    format!("{}?date={}", base_url.trim_end_matches('/'), format_date(date))
}

/// Builds one URL per date of the window, in window order.
#[must_use]
pub fn exchange_rates_urls(base_url: &str, window: &DateWindow) -> Vec<String> {
    window
        .iter()
        .map(|date| exchange_rates_url(base_url, *date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hryvnia_types::DayCount;

    #[test]
    fn test_exchange_rates_url() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            exchange_rates_url(BASE_URL, date),
            "https://api.privatbank.ua/p24api/exchange_rates?date=31.12.2024"
        );
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            exchange_rates_url("http://127.0.0.1:1234/rates/", date),
            "http://127.0.0.1:1234/rates?date=09.03.2024"
        );
    }

    #[test]
    fn test_urls_follow_window_order() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let window = DateWindow::new(end, DayCount::new(4));
        let urls = exchange_rates_urls(BASE_URL, &window);

        assert_eq!(urls.len(), window.len());
        for (url, label) in urls.iter().zip(window.labels()) {
            assert!(url.ends_with(&label), "{url} should end with {label}");
        }
    }
}
