//! Date window calculation for the last-year temperature query

use crate::climate::error::StoreError;
use chrono::{Duration, NaiveDate};

/// Storage format of the `measurement.date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing window, in days
pub const WINDOW_DAYS: i64 = 365;

/// Inclusive `[start, end]` bounds, formatted for string comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationWindow {
    /// Earliest date in the window
    pub start: String,
    /// Latest date in the window
    pub end: String,
}

impl ObservationWindow {
    /// Window covering the 365 days up to and including `latest`
    ///
    /// This is a fixed day count, so a window ending after Feb 29 starts one
    /// calendar day later than "one year ago".
    pub fn one_year_ending(latest: &str) -> Result<Self, StoreError> {
        let end = NaiveDate::parse_from_str(latest, DATE_FORMAT)
            .map_err(|_| StoreError::InvalidStoredDate(latest.to_string()))?;
        let start = end - Duration::days(WINDOW_DAYS);

        Ok(Self {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_regular_year() {
        let window = ObservationWindow::one_year_ending("2017-08-23").unwrap();
        assert_eq!(window.start, "2016-08-23");
        assert_eq!(window.end, "2017-08-23");
    }

    #[test]
    fn test_window_spanning_leap_day() {
        // 2016-02-29 falls inside, so 365 days back lands one day short of a year
        let window = ObservationWindow::one_year_ending("2016-08-23").unwrap();
        assert_eq!(window.start, "2015-08-24");
    }

    #[test]
    fn test_window_rejects_malformed_date() {
        let err = ObservationWindow::one_year_ending("23/08/2017").unwrap_err();
        assert!(matches!(err, StoreError::InvalidStoredDate(d) if d == "23/08/2017"));
    }
}
