//! Trading-day calendar: the `DaysOff` capability and open-day filter.
//!
//! The engine never owns calendar data. It queries an injected
//! [`DaysOff`] collaborator once per candidate day, and [`OpenDays`]
//! layers the weekend rule on top to produce the ordered sequence of
//! trading days for a simulation window.

pub mod days_off;
pub mod open_days;

pub use days_off::{DaysOff, HolidayCalendar, NoHolidays};
pub use open_days::OpenDays;
