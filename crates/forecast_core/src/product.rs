//! Priced instrument at a reference date.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Date, ProductError};

/// Number of fractional digits a stored price carries.
pub const PRICE_SCALE: u32 = 10;

/// Number of fractional digits a volatility percent input is rounded to
/// before conversion to a fraction.
pub const VOLATILITY_PERCENT_SCALE: u32 = 2;

/// Half-up rounding, the conventional financial midpoint rule.
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// An immutable priced instrument at a reference date.
///
/// Holds the simulation's day-zero inputs: the reference price
/// (normalised to [`PRICE_SCALE`] fractional digits, half-up) and the
/// daily volatility as a fraction (percent input rounded to
/// [`VOLATILITY_PERCENT_SCALE`] digits half-up, then divided by 100).
///
/// Construction validates; a constructed product never changes.
/// Equality and hashing are structural over (date, price, volatility).
///
/// # Examples
///
/// ```
/// use forecast_core::product::Product;
/// use forecast_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let date = Date::from_ymd(2017, 5, 19).unwrap();
/// let product = Product::new(date, dec!(100), dec!(1)).unwrap();
///
/// assert_eq!(product.price(), dec!(100));
/// assert_eq!(product.volatility(), dec!(0.01));
///
/// // Volatility of exactly 100% is rejected
/// assert!(Product::new(date, dec!(100), dec!(100)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Product {
    reference_date: Date,
    price: Decimal,
    volatility: Decimal,
}

impl Product {
    /// Creates a validated product.
    ///
    /// # Arguments
    /// * `reference_date` - The simulation's day-zero
    /// * `price` - Reference price; rescaled to 10 fractional digits, half-up
    /// * `volatility_percent` - Daily move magnitude as a percent;
    ///   magnitude must be strictly between 0 and 100
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::VolatilityOutOfRange`] when
    /// `|volatility_percent|` is 0, 100, or outside (0, 100).
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_core::product::Product;
    /// use forecast_core::types::Date;
    /// use rust_decimal_macros::dec;
    ///
    /// let date = Date::from_ymd(2017, 5, 19).unwrap();
    ///
    /// // Negative percents are accepted by magnitude
    /// let product = Product::new(date, dec!(42.5), dec!(-2.5)).unwrap();
    /// assert_eq!(product.volatility(), dec!(-0.025));
    /// ```
    pub fn new(
        reference_date: Date,
        price: Decimal,
        volatility_percent: Decimal,
    ) -> Result<Self, ProductError> {
        if !Self::is_percent(volatility_percent.abs()) {
            return Err(ProductError::VolatilityOutOfRange {
                percent: volatility_percent,
            });
        }

        let volatility = volatility_percent
            .round_dp_with_strategy(VOLATILITY_PERCENT_SCALE, ROUNDING)
            / dec!(100);

        Ok(Self {
            reference_date,
            price: price.round_dp_with_strategy(PRICE_SCALE, ROUNDING),
            volatility,
        })
    }

    /// Strict percent check on the input magnitude, before any rounding.
    fn is_percent(magnitude: Decimal) -> bool {
        magnitude > Decimal::ZERO && magnitude < dec!(100)
    }

    /// Returns the reference date (the simulation's day-zero).
    #[inline]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the normalised reference price.
    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the volatility as a decimal fraction (e.g. `0.01` for 1%).
    #[inline]
    pub fn volatility(&self) -> Decimal {
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> Date {
        Date::from_ymd(2017, 5, 19).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let product = Product::new(date(), dec!(100), dec!(1)).unwrap();
        assert_eq!(product.reference_date(), date());
        assert_eq!(product.price(), dec!(100));
        assert_eq!(product.volatility(), dec!(0.01));
    }

    #[test]
    fn test_volatility_boundaries_rejected() {
        for percent in [dec!(0), dec!(100), dec!(-100), dec!(150), dec!(-150)] {
            let result = Product::new(date(), dec!(100), percent);
            assert_eq!(
                result,
                Err(ProductError::VolatilityOutOfRange { percent }),
                "percent {} should be rejected",
                percent
            );
        }
    }

    #[test]
    fn test_volatility_just_inside_bounds_accepted() {
        for percent in [dec!(0.01), dec!(99.99), dec!(-0.01), dec!(-99.99)] {
            assert!(
                Product::new(date(), dec!(100), percent).is_ok(),
                "percent {} should be accepted",
                percent
            );
        }
    }

    #[test]
    fn test_negative_percent_keeps_sign() {
        let product = Product::new(date(), dec!(100), dec!(-2.5)).unwrap();
        assert_eq!(product.volatility(), dec!(-0.025));
    }

    #[test]
    fn test_price_rounded_half_up_to_scale_10() {
        let product = Product::new(date(), dec!(1.00000000005), dec!(1)).unwrap();
        assert_eq!(product.price(), dec!(1.0000000001));

        let product = Product::new(date(), dec!(1.00000000004), dec!(1)).unwrap();
        assert_eq!(product.price(), dec!(1.0000000000));
    }

    #[test]
    fn test_percent_rounded_half_up_to_scale_2() {
        // 1.005% rounds half-up to 1.01%, stored as 0.0101
        let product = Product::new(date(), dec!(100), dec!(1.005)).unwrap();
        assert_eq!(product.volatility(), dec!(0.0101));

        let product = Product::new(date(), dec!(100), dec!(1.004)).unwrap();
        assert_eq!(product.volatility(), dec!(0.01));
    }

    #[test]
    fn test_structural_equality_and_hash() {
        use std::collections::HashSet;

        let a = Product::new(date(), dec!(100), dec!(1)).unwrap();
        let b = Product::new(date(), dec!(100), dec!(1)).unwrap();
        let c = Product::new(date(), dec!(100), dec!(2)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Product> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = Product::new(date(), dec!(42.5), dec!(1.5)).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn percent_strategy() -> impl Strategy<Value = Decimal> {
            // Two-decimal percents across the full input line.
            (-20_000i64..20_000i64).prop_map(|cents| Decimal::new(cents, 2))
        }

        proptest! {
            #[test]
            fn test_validation_matches_open_interval(percent in percent_strategy()) {
                let inside = percent.abs() > Decimal::ZERO && percent.abs() < dec!(100);
                let result = Product::new(
                    Date::from_ymd(2017, 5, 19).unwrap(),
                    dec!(100),
                    percent,
                );
                prop_assert_eq!(result.is_ok(), inside);
            }

            #[test]
            fn test_volatility_is_percent_over_100(percent in percent_strategy()) {
                if let Ok(product) = Product::new(
                    Date::from_ymd(2017, 5, 19).unwrap(),
                    dec!(100),
                    percent,
                ) {
                    prop_assert_eq!(product.volatility() * dec!(100), percent.normalize());
                }
            }
        }
    }
}
