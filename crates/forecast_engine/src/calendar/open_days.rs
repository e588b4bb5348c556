//! Open-day enumeration.

use forecast_core::Date;

use super::days_off::DaysOff;

/// Stateless open-day filter over an injected holiday calendar.
///
/// Given a window `(start, end]`, yields in order every date that is a
/// trading day: not a Saturday or Sunday, and not reported as a holiday
/// by the wrapped [`DaysOff`] collaborator.
///
/// The sequence is lazy and restartable; each call to
/// [`open_days`](OpenDays::open_days) recomputes from scratch without
/// materialising the window.
///
/// # Examples
///
/// ```
/// use forecast_core::Date;
/// use forecast_engine::calendar::{NoHolidays, OpenDays};
///
/// let open_days = OpenDays::new(NoHolidays);
/// let friday = Date::from_ymd(2017, 5, 19).unwrap();
/// let wednesday = Date::from_ymd(2017, 5, 24).unwrap();
///
/// // Friday (exclusive) to Wednesday (inclusive) skips the weekend
/// let days: Vec<Date> = open_days.open_days(friday, wednesday).collect();
/// assert_eq!(days.len(), 3); // Mon, Tue, Wed
/// ```
#[derive(Clone, Debug)]
pub struct OpenDays<D: DaysOff> {
    days_off: D,
}

impl<D: DaysOff> OpenDays<D> {
    /// Creates an open-day filter over the given holiday calendar.
    pub fn new(days_off: D) -> Self {
        Self { days_off }
    }

    /// Yields the ordered trading days in `(start, end]`.
    ///
    /// Enumerates every calendar date strictly after `start` up to and
    /// including `end`, keeping those that are neither weekend days nor
    /// holidays. An empty window (`end <= start`) yields nothing; the
    /// ordering precondition itself is enforced by the caller.
    ///
    /// # Arguments
    /// * `start` - Window start, exclusive
    /// * `end` - Window end, inclusive
    pub fn open_days(&self, start: Date, end: Date) -> impl Iterator<Item = Date> + '_ {
        let candidates = (end - start).max(0) as usize;
        std::iter::successors(Some(start.succ()), |day| Some(day.succ()))
            .take(candidates)
            .filter(move |day| !day.is_weekend() && !self.days_off.is_days_off(*day))
    }
}
