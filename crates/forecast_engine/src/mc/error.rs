//! Error types for the forecasting engine.
//!
//! All variants are synchronous failures: the caller must fix the
//! input (or shrink the simulated window) and retry. The engine has no
//! I/O and no partial failure modes.

use forecast_core::Date;
use thiserror::Error;

/// Forecast request and simulation errors.
///
/// # Variants
/// - `NonCausalForecastDate`: forecast date not strictly after the
///   product's reference date
/// - `InvalidTrajectoryCount`: Monte Carlo trajectory count of zero
/// - `PriceOverflow`: a trajectory or aggregate left the decimal range
///
/// # Examples
/// ```
/// use forecast_core::Date;
/// use forecast_engine::mc::ForecastError;
///
/// let err = ForecastError::NonCausalForecastDate {
///     reference_date: Date::from_ymd(2017, 5, 19).unwrap(),
///     forecast_date: Date::from_ymd(2017, 5, 19).unwrap(),
/// };
/// assert!(format!("{}", err).contains("2017-05-19"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// Forecast date must be strictly after the reference date.
    #[error(
        "Forecast date {forecast_date} must be strictly after reference date {reference_date}"
    )]
    NonCausalForecastDate {
        /// The product's reference date.
        reference_date: Date,
        /// The rejected forecast date.
        forecast_date: Date,
    },

    /// Monte Carlo requires at least one trajectory.
    #[error("Invalid trajectory count {0}: must be at least 1")]
    InvalidTrajectoryCount(u32),

    /// A simulated price left the representable decimal range.
    ///
    /// High volatility compounded over a long window can push a
    /// trajectory (or the Monte Carlo sum) past the 28-digit decimal
    /// limit. The inputs are valid individually; the combination is
    /// not simulatable at this precision.
    #[error(
        "Price overflow forecasting from {reference_date} to {forecast_date}: value exceeds the decimal range"
    )]
    PriceOverflow {
        /// The product's reference date.
        reference_date: Date,
        /// The requested forecast date.
        forecast_date: Date,
    },
}
