//! Holiday calendar capability.

use std::collections::HashSet;

use forecast_core::Date;

/// Read-only holiday lookup consumed by the open-day filter.
///
/// Implementations are queried once per candidate calendar day, in no
/// particular order, and must behave as pure lookups: the same date
/// always receives the same answer within one simulation.
pub trait DaysOff {
    /// Returns true if the given date is a holiday (a non-trading day
    /// other than a weekend).
    fn is_days_off(&self, date: Date) -> bool;
}

impl<T: DaysOff + ?Sized> DaysOff for &T {
    fn is_days_off(&self, date: Date) -> bool {
        (**self).is_days_off(date)
    }
}

/// A calendar with no holidays: every weekday is a trading day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl DaysOff for NoHolidays {
    #[inline]
    fn is_days_off(&self, _date: Date) -> bool {
        false
    }
}

/// Set-backed holiday calendar.
///
/// The simplest production [`DaysOff`] implementation: a static set of
/// holiday dates, typically loaded from a file or a market-data feed at
/// startup.
///
/// # Examples
///
/// ```
/// use forecast_core::Date;
/// use forecast_engine::calendar::{DaysOff, HolidayCalendar};
///
/// let calendar = HolidayCalendar::new([
///     Date::from_ymd(2017, 5, 18).unwrap(),
///     Date::from_ymd(2017, 5, 19).unwrap(),
/// ]);
///
/// assert!(calendar.is_days_off(Date::from_ymd(2017, 5, 18).unwrap()));
/// assert!(!calendar.is_days_off(Date::from_ymd(2017, 5, 22).unwrap()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: HashSet<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from any collection of holiday dates.
    ///
    /// Duplicate dates are collapsed.
    pub fn new(holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Returns the number of distinct holidays in the calendar.
    #[inline]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar holds no holidays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl DaysOff for HolidayCalendar {
    #[inline]
    fn is_days_off(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

impl FromIterator<Date> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self::new(iter)
    }
}
