//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `ProductError`: Errors from product validation

use rust_decimal::Decimal;
use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use forecast_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Product validation errors.
///
/// Raised at construction when the volatility input does not describe a
/// usable percentage. Construction is the only place a product can fail;
/// a constructed product is valid for its whole lifetime.
///
/// # Examples
/// ```
/// use forecast_core::types::ProductError;
/// use rust_decimal_macros::dec;
///
/// let err = ProductError::VolatilityOutOfRange { percent: dec!(100) };
/// assert!(format!("{}", err).contains("100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Volatility percent magnitude not strictly between 0 and 100.
    #[error("Volatility {percent}% out of range: magnitude must be strictly between 0 and 100")]
    VolatilityOutOfRange {
        /// The rejected percent input.
        percent: Decimal,
    },
}
