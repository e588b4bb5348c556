//! Shared value types: dates, slopes, and error definitions.

pub mod date;
pub mod error;
pub mod slope;

pub use date::Date;
pub use error::{DateError, ProductError};
pub use slope::Slope;
