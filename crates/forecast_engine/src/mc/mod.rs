//! Monte Carlo forecasting: single trajectories and parallel averaging.

pub mod error;
pub mod forecaster;

pub use error::ForecastError;
pub use forecaster::PriceForecaster;
