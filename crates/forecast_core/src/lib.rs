//! # Forecast Core (Core layer)
//!
//! Value types shared by every layer of the trinomial random-walk
//! forecaster:
//!
//! - [`types::Date`]: type-safe calendar date wrapper
//! - [`types::Slope`]: the three-valued daily price direction
//! - [`product::Product`]: validated priced instrument at a reference date
//!
//! All monetary quantities use [`rust_decimal::Decimal`] at fixed scale
//! with half-up rounding, so long multiplicative chains stay exact.
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_core::product::Product;
//! use forecast_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let reference = Date::from_ymd(2017, 5, 19).unwrap();
//! let product = Product::new(reference, dec!(100), dec!(1)).unwrap();
//!
//! assert_eq!(product.volatility(), dec!(0.01));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod product;
pub mod types;

pub use product::Product;
pub use types::{Date, DateError, ProductError, Slope};
