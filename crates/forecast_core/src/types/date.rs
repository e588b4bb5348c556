//! Calendar date type for the simulation.
//!
//! This module provides `Date`, a type-safe wrapper around
//! `chrono::NaiveDate` with the small surface the forecaster needs:
//! construction, ISO 8601 parsing, day arithmetic, and the weekend
//! predicate used by the open-day filter.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the date arithmetic used by the
/// open-day enumeration: successor dates and signed day differences.
///
/// # Examples
///
/// ```
/// use forecast_core::types::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2017, 5, 19).unwrap();
/// assert_eq!(date.year(), 2017);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2017-05-19".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Friday 2017-05-19 is a trading day; the next day is not
/// assert!(!date.is_weekend());
/// assert!(date.succ().is_weekend());
///
/// // Calculate days between dates
/// let end = Date::from_ymd(2017, 5, 24).unwrap();
/// assert_eq!(end - date, 5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2017)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Arguments
    /// * `s` - Date string in ISO 8601 format
    ///
    /// # Returns
    /// `Ok(Date)` if parsing succeeds, `Err(DateError::ParseError)` otherwise.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the next calendar day.
    ///
    /// The open-day filter walks candidate dates one day at a time, so
    /// the successor is total for any date the simulation can reach.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.succ(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn succ(self) -> Self {
        // NaiveDate covers +/- ~262_000 years; one day past any
        // representable simulation date cannot overflow.
        Date(
            self.0
                .checked_add_days(Days::new(1))
                .expect("date successor within chrono range"),
        )
    }

    /// Returns true if this date falls on a Saturday or Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_core::types::Date;
    ///
    /// assert!(Date::from_ymd(2017, 5, 20).unwrap().is_weekend()); // Saturday
    /// assert!(Date::from_ymd(2017, 5, 21).unwrap().is_weekend()); // Sunday
    /// assert!(!Date::from_ymd(2017, 5, 22).unwrap().is_weekend()); // Monday
    /// ```
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
