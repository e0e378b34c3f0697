//! Day counts and the trailing window of dates they describe.

use chrono::{Days, Local, NaiveDate};

/// Date format used by the upstream API, both in URLs and in responses.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Formats a date the way the upstream API expects (`DD.MM.YYYY`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Number of trailing calendar days to query, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayCount(u8);

impl DayCount {
    /// The smallest window: today only.
    pub const MIN: Self = Self(1);
    /// The largest window the upstream is queried for.
    pub const MAX: Self = Self(10);

    /// Creates a day count, clamping `days` into `1..=10`.
    #[must_use]
    pub const fn new(days: i64) -> Self {
        if days <= Self::MIN.0 as i64 {
            Self::MIN
        } else if days >= Self::MAX.0 as i64 {
            Self::MAX
        } else {
            Self(days as u8)
        }
    }

    /// Parses a raw token into a day count.
    ///
    /// Tokens made only of ASCII digits are clamped like [`DayCount::new`],
    /// including values too large for an integer. Anything else yields
    /// [`DayCount::MIN`].
    ///
    /// ```
    /// use hryvnia_types::DayCount;
    ///
    /// assert_eq!(DayCount::from_token("4").get(), 4);
    /// assert_eq!(DayCount::from_token("0").get(), 1);
    /// assert_eq!(DayCount::from_token("99999999999999999999").get(), 10);
    /// assert_eq!(DayCount::from_token("four").get(), 1);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if !is_numeric(token) {
            return Self::MIN;
        }
        token.parse::<i64>().map_or(Self::MAX, Self::new)
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl std::fmt::Display for DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true if the token is a non-empty run of ASCII digits.
pub(crate) fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Ordered list of calendar dates, most recent first.
///
/// A window built for `n` days starting at `end` holds
/// `end, end - 1, ..., end - (n - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    dates: Vec<NaiveDate>,
}

impl DateWindow {
    /// Builds the window of `days` dates ending at (and including) `end`.
    #[must_use]
    pub fn new(end: NaiveDate, days: DayCount) -> Self {
        let dates = (0..days.get() as u64)
            .map_while(|offset| end.checked_sub_days(Days::new(offset)))
            .collect();
        Self { dates }
    }

    /// Builds the window ending at today's date on the local clock.
    #[must_use]
    pub fn ending_today(days: DayCount) -> Self {
        Self::new(Local::now().date_naive(), days)
    }

    /// Returns the dates, most recent first.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the number of dates in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the window holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns an iterator over the dates, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }

    /// Returns the dates formatted as `DD.MM.YYYY`.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.dates.iter().copied().map(format_date)
    }
}

impl<'a> IntoIterator for &'a DateWindow {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
