//! Price forecasting engine.
//!
//! This module provides the orchestration layer for the trinomial
//! random walk:
//!
//! 1. Open-day enumeration (via [`OpenDays`])
//! 2. One slope draw per open day (via [`SlopeRandomizer`])
//! 3. Left-to-right fold of multiplicative factors over the reference price
//! 4. Parallel Monte Carlo aggregation (rayon), exact sum, one final
//!    half-up rounding of the average
//!
//! All arithmetic after product construction is exact decimal; rounding
//! compounds nowhere inside a trajectory. Every multiplication and
//! addition is checked, so a walk that leaves the decimal range surfaces
//! as [`ForecastError::PriceOverflow`] instead of aborting.

use rayon::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use forecast_core::product::{Product, PRICE_SCALE};
use forecast_core::{Date, Slope};

use crate::calendar::{DaysOff, OpenDays};
use crate::rng::SlopeRandomizer;

use super::error::ForecastError;

/// Trinomial random-walk forecaster.
///
/// Orchestrates the open-day calendar and the slope randomizer to
/// evolve a product's reference price to a forecast date, and averages
/// many independent trajectories into a Monte Carlo estimate.
///
/// Both collaborators are injected at construction so tests can
/// substitute a deterministic calendar and randomizer.
///
/// # Examples
///
/// ```
/// use forecast_core::{Date, Product, Slope};
/// use forecast_engine::calendar::NoHolidays;
/// use forecast_engine::mc::PriceForecaster;
/// use forecast_engine::rng::FixedSlopeRandomizer;
/// use rust_decimal_macros::dec;
///
/// let reference = Date::from_ymd(2017, 5, 19).unwrap();
/// let product = Product::new(reference, dec!(1), dec!(1)).unwrap();
///
/// // Always-up walk over Mon, Tue, Wed: 1.01^3
/// let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
/// let price = forecaster
///     .forecast(&product, Date::from_ymd(2017, 5, 24).unwrap())
///     .unwrap();
/// assert_eq!(price, dec!(1.030301));
/// ```
pub struct PriceForecaster<D: DaysOff, R: SlopeRandomizer> {
    open_days: OpenDays<D>,
    randomizer: R,
}

impl<D: DaysOff, R: SlopeRandomizer> PriceForecaster<D, R> {
    /// Creates a forecaster over the given calendar and randomizer.
    pub fn new(days_off: D, randomizer: R) -> Self {
        Self {
            open_days: OpenDays::new(days_off),
            randomizer,
        }
    }

    /// Simulates one price trajectory to the forecast date.
    ///
    /// Draws one slope per open day in `(reference_date, forecast_date]`
    /// and folds the matching factors into the reference price. If the
    /// window contains no open days the reference price is returned
    /// unchanged.
    ///
    /// Two calls with identical inputs may return different prices;
    /// each call is an independent stochastic trial.
    ///
    /// # Arguments
    /// * `product` - The priced instrument to evolve
    /// * `forecast_date` - Target date, strictly after the reference date
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::NonCausalForecastDate`] when
    /// `forecast_date <= product.reference_date()`, and
    /// [`ForecastError::PriceOverflow`] when the compounded walk leaves
    /// the representable decimal range.
    pub fn forecast(
        &self,
        product: &Product,
        forecast_date: Date,
    ) -> Result<Decimal, ForecastError> {
        self.check_causal(product, forecast_date)?;
        self.run_trajectory(product, forecast_date)
    }

    /// Estimates the expected forecast price by Monte Carlo averaging.
    ///
    /// Runs `trajectory_count` independent trajectories in parallel,
    /// sums the exact decimal outcomes, and rounds only the final
    /// quotient half-up to the stored price scale.
    ///
    /// Every sample lies between the all-DOWN and all-UP trajectory
    /// bounds, since each daily factor is one of `{1-v, 1, 1+v}`.
    ///
    /// # Arguments
    /// * `product` - The priced instrument to evolve
    /// * `forecast_date` - Target date, strictly after the reference date
    /// * `trajectory_count` - Number of independent trajectories, at least 1
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidTrajectoryCount`] for a zero
    /// count, [`ForecastError::NonCausalForecastDate`] for a
    /// non-causal date, and [`ForecastError::PriceOverflow`] when a
    /// trajectory or the running sum leaves the decimal range.
    pub fn forecast_with_monte_carlo(
        &self,
        product: &Product,
        forecast_date: Date,
        trajectory_count: u32,
    ) -> Result<Decimal, ForecastError>
    where
        D: Sync,
        R: Sync,
    {
        if trajectory_count == 0 {
            return Err(ForecastError::InvalidTrajectoryCount(trajectory_count));
        }
        self.check_causal(product, forecast_date)?;

        debug!(
            trajectories = trajectory_count,
            reference_date = %product.reference_date(),
            forecast_date = %forecast_date,
            "running Monte Carlo batch"
        );

        let total = (0..trajectory_count)
            .into_par_iter()
            .map(|_| self.run_trajectory(product, forecast_date))
            .try_reduce(
                || Decimal::ZERO,
                |a, b| {
                    a.checked_add(b)
                        .ok_or_else(|| Self::overflow(product, forecast_date))
                },
            )?;

        let average = (total / Decimal::from(trajectory_count))
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

        debug!(estimate = %average, "Monte Carlo batch complete");
        Ok(average)
    }

    /// One trajectory: causality already checked. Overflow is the only
    /// failure left.
    fn run_trajectory(
        &self,
        product: &Product,
        forecast_date: Date,
    ) -> Result<Decimal, ForecastError> {
        let volatility = product.volatility();
        self.open_days
            .open_days(product.reference_date(), forecast_date)
            .map(|_| daily_factor(self.randomizer.random_slope(), volatility))
            .try_fold(product.price(), |price, factor| {
                price
                    .checked_mul(factor)
                    .ok_or_else(|| Self::overflow(product, forecast_date))
            })
    }

    fn overflow(product: &Product, forecast_date: Date) -> ForecastError {
        ForecastError::PriceOverflow {
            reference_date: product.reference_date(),
            forecast_date,
        }
    }

    fn check_causal(&self, product: &Product, forecast_date: Date) -> Result<(), ForecastError> {
        if forecast_date <= product.reference_date() {
            return Err(ForecastError::NonCausalForecastDate {
                reference_date: product.reference_date(),
                forecast_date,
            });
        }
        Ok(())
    }
}

/// Maps a day's slope to its multiplicative price factor.
#[inline]
fn daily_factor(slope: Slope, volatility: Decimal) -> Decimal {
    match slope {
        Slope::Up => Decimal::ONE + volatility,
        Slope::Down => Decimal::ONE - volatility,
        Slope::Flat => Decimal::ONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayCalendar, NoHolidays};
    use crate::rng::{FixedSlopeRandomizer, ThreadRngSlopeRandomizer};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn product(price: Decimal, percent: Decimal) -> Product {
        Product::new(d(2017, 5, 19), price, percent).unwrap()
    }

    #[test]
    fn test_daily_factor_mapping() {
        let v = dec!(0.01);
        assert_eq!(daily_factor(Slope::Up, v), dec!(1.01));
        assert_eq!(daily_factor(Slope::Down, v), dec!(0.99));
        assert_eq!(daily_factor(Slope::Flat, v), dec!(1));
    }

    #[test]
    fn test_flat_walk_returns_reference_price() {
        let forecaster =
            PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Flat));
        let product = product(dec!(57.3500000000), dec!(5));
        let price = forecaster.forecast(&product, d(2017, 6, 30)).unwrap();
        assert_eq!(price, product.price());
    }

    #[test]
    fn test_up_walk_over_one_open_day() {
        let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
        // Friday to Monday: one open day
        let price = forecaster
            .forecast(&product(dec!(1), dec!(1)), d(2017, 5, 22))
            .unwrap();
        assert_eq!(price, dec!(1.01));
    }

    #[test]
    fn test_up_walk_over_three_open_days() {
        let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
        // Friday 2017-05-19 to Wednesday 2017-05-24: Mon, Tue, Wed
        let price = forecaster
            .forecast(&product(dec!(1), dec!(1)), d(2017, 5, 24))
            .unwrap();
        assert_eq!(price, dec!(1.030301));
    }

    #[test]
    fn test_down_walk_over_three_open_days() {
        let forecaster =
            PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Down));
        let price = forecaster
            .forecast(&product(dec!(1), dec!(1)), d(2017, 5, 24))
            .unwrap();
        assert_eq!(price, dec!(0.99) * dec!(0.99) * dec!(0.99));
    }

    #[test]
    fn test_holidays_shrink_the_walk() {
        let calendar = HolidayCalendar::new([d(2017, 5, 18), d(2017, 5, 19)]);
        let forecaster =
            PriceForecaster::new(calendar, FixedSlopeRandomizer::new(Slope::Up));
        let product = Product::new(d(2017, 5, 17), dec!(1), dec!(1)).unwrap();
        // Thu/Fri holidays plus the weekend leave Mon, Tue, Wed
        let price = forecaster.forecast(&product, d(2017, 5, 24)).unwrap();
        assert_eq!(price, dec!(1.030301));
    }

    #[test]
    fn test_window_without_open_days_keeps_price() {
        let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
        // Friday to Sunday: no trading days at all
        let price = forecaster
            .forecast(&product(dec!(100), dec!(1)), d(2017, 5, 21))
            .unwrap();
        assert_eq!(price, dec!(100));
    }

    #[test]
    fn test_forecast_rejects_non_causal_dates() {
        let forecaster = PriceForecaster::new(NoHolidays, ThreadRngSlopeRandomizer);
        let product = product(dec!(100), dec!(1));

        for bad_date in [d(2017, 5, 19), d(2017, 5, 18)] {
            let result = forecaster.forecast(&product, bad_date);
            assert_eq!(
                result,
                Err(ForecastError::NonCausalForecastDate {
                    reference_date: d(2017, 5, 19),
                    forecast_date: bad_date,
                })
            );
        }
    }

    #[test]
    fn test_overflowing_walk_returns_error() {
        // 99% volatility compounds at 1.99 per open day; six months of
        // all-up draws exceeds the 28-digit decimal range.
        let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
        let product = Product::new(d(2017, 1, 2), dec!(100), dec!(99)).unwrap();

        let result = forecaster.forecast(&product, d(2017, 7, 3));
        assert_eq!(
            result,
            Err(ForecastError::PriceOverflow {
                reference_date: d(2017, 1, 2),
                forecast_date: d(2017, 7, 3),
            })
        );
    }

    #[test]
    fn test_monte_carlo_surfaces_overflow() {
        let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
        let product = Product::new(d(2017, 1, 2), dec!(100), dec!(99)).unwrap();

        let result = forecaster.forecast_with_monte_carlo(&product, d(2017, 7, 3), 100);
        assert!(matches!(result, Err(ForecastError::PriceOverflow { .. })));
    }

    #[test]
    fn test_monte_carlo_rejects_zero_trajectories() {
        let forecaster = PriceForecaster::new(NoHolidays, ThreadRngSlopeRandomizer);
        let result =
            forecaster.forecast_with_monte_carlo(&product(dec!(100), dec!(1)), d(2017, 5, 24), 0);
        assert_eq!(result, Err(ForecastError::InvalidTrajectoryCount(0)));
    }

    #[test]
    fn test_monte_carlo_rejects_non_causal_dates() {
        let forecaster = PriceForecaster::new(NoHolidays, ThreadRngSlopeRandomizer);
        let result = forecaster.forecast_with_monte_carlo(
            &product(dec!(100), dec!(1)),
            d(2017, 5, 19),
            100,
        );
        assert!(matches!(
            result,
            Err(ForecastError::NonCausalForecastDate { .. })
        ));
    }

    #[test]
    fn test_monte_carlo_of_flat_walk_is_exact() {
        let forecaster =
            PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Flat));
        let product = product(dec!(100), dec!(1));
        let average = forecaster
            .forecast_with_monte_carlo(&product, d(2017, 5, 24), 1_000)
            .unwrap();
        assert_eq!(average, dec!(100));
    }

    #[test]
    fn test_monte_carlo_single_trajectory_matches_forecast_shape() {
        let forecaster = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up));
        let product = product(dec!(1), dec!(1));
        let average = forecaster
            .forecast_with_monte_carlo(&product, d(2017, 5, 24), 1)
            .unwrap();
        assert_eq!(average, dec!(1.030301));
    }

    #[test]
    fn test_monte_carlo_within_trajectory_envelope() {
        let forecaster = PriceForecaster::new(NoHolidays, ThreadRngSlopeRandomizer);
        // Friday 2017-05-19 to Friday 2017-05-26: 5 open days
        let product = product(dec!(100), dec!(1));
        let average = forecaster
            .forecast_with_monte_carlo(&product, d(2017, 5, 26), 10_000)
            .unwrap();

        let lower = (0..5).fold(dec!(100), |p, _| p * dec!(0.99));
        let upper = (0..5).fold(dec!(100), |p, _| p * dec!(1.01));
        assert!(
            average >= lower && average <= upper,
            "estimate {} outside [{}, {}]",
            average,
            lower,
            upper
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Any fixed-slope walk stays inside the trajectory envelope
            // and FLAT reproduces the reference price exactly.
            #[test]
            fn test_fixed_walks_respect_envelope(
                span in 1i64..90i64,
                cents in 1i64..1_000_000i64,
                percent_cents in 1i64..2_000i64,
            ) {
                let price = Decimal::new(cents, 2);
                let percent = Decimal::new(percent_cents, 2);
                let reference = d(2017, 5, 19);
                let mut forecast_date = reference;
                for _ in 0..span {
                    forecast_date = forecast_date.succ();
                }

                let product = Product::new(reference, price, percent).unwrap();
                let open_days = OpenDays::new(NoHolidays)
                    .open_days(reference, forecast_date)
                    .count() as u64;

                let up = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Up))
                    .forecast(&product, forecast_date)
                    .unwrap();
                let down = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Down))
                    .forecast(&product, forecast_date)
                    .unwrap();
                let flat = PriceForecaster::new(NoHolidays, FixedSlopeRandomizer::new(Slope::Flat))
                    .forecast(&product, forecast_date)
                    .unwrap();

                prop_assert_eq!(flat, product.price());
                let v = product.volatility();
                // Mirror the engine's fold order so exact equality holds
                // even when precision saturates.
                let expected_up =
                    (0..open_days).fold(product.price(), |p, _| p * (Decimal::ONE + v));
                let expected_down =
                    (0..open_days).fold(product.price(), |p, _| p * (Decimal::ONE - v));
                prop_assert_eq!(up, expected_up);
                prop_assert_eq!(down, expected_down);
                prop_assert!(down <= flat && flat <= up);
            }
        }
    }
}
