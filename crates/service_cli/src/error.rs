//! CLI error type
//!
//! Wraps the engine's validation errors together with the parsing and
//! I/O failures that only exist at the command-line boundary.

use forecast_core::{DateError, ProductError};
use forecast_engine::ForecastError;
use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command-line user.
#[derive(Error, Debug)]
pub enum CliError {
    /// A date argument or holiday-file line failed to parse.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The product inputs were rejected.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// The forecast request was rejected by the engine.
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// A numeric argument failed to parse.
    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber {
        /// The rejected argument text.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The holiday file could not be read.
    #[error("Cannot read holiday file '{path}': {source}")]
    HolidayFile {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
