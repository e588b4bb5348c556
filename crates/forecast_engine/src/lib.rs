//! # Forecast Engine (Engine layer)
//!
//! The simulation engine for the trinomial random-walk forecaster:
//!
//! - [`calendar`]: open-day enumeration over an injected holiday
//!   calendar ([`calendar::DaysOff`])
//! - [`rng`]: concurrency-safe uniform slope draws
//!   ([`rng::SlopeRandomizer`])
//! - [`mc`]: single-trajectory price evolution and parallel Monte
//!   Carlo averaging ([`mc::PriceForecaster`])
//!
//! All collaborators are injected, never global, so deterministic
//! stand-ins can replace the calendar and the randomizer in tests.
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_core::{Date, Product};
//! use forecast_engine::calendar::NoHolidays;
//! use forecast_engine::mc::PriceForecaster;
//! use forecast_engine::rng::ThreadRngSlopeRandomizer;
//! use rust_decimal_macros::dec;
//!
//! let reference = Date::from_ymd(2017, 5, 19).unwrap();
//! let forecast_date = Date::from_ymd(2017, 5, 24).unwrap();
//! let product = Product::new(reference, dec!(100), dec!(1)).unwrap();
//!
//! let forecaster = PriceForecaster::new(NoHolidays, ThreadRngSlopeRandomizer);
//! let estimate = forecaster
//!     .forecast_with_monte_carlo(&product, forecast_date, 1_000)
//!     .unwrap();
//!
//! // Three open days at 1% volatility bound the estimate
//! assert!(estimate >= dec!(100) * dec!(0.99) * dec!(0.99) * dec!(0.99));
//! assert!(estimate <= dec!(100) * dec!(1.01) * dec!(1.01) * dec!(1.01));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod mc;
pub mod rng;

pub use calendar::{DaysOff, HolidayCalendar, NoHolidays, OpenDays};
pub use mc::{ForecastError, PriceForecaster};
pub use rng::{
    FixedSlopeRandomizer, SeededSlopeRandomizer, SlopeRandomizer, ThreadRngSlopeRandomizer,
};
