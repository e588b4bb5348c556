//! Forecast command implementation
//!
//! Parses the product and window from the arguments, loads the optional
//! holiday file, and runs a Monte Carlo forecast.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::info;

use forecast_core::{Date, Product};
use forecast_engine::{
    HolidayCalendar, PriceForecaster, SeededSlopeRandomizer, SlopeRandomizer,
    ThreadRngSlopeRandomizer,
};

use crate::{CliError, Result};

/// Run the forecast command
pub fn run(
    reference_date: &str,
    price: &str,
    volatility: &str,
    forecast_date: &str,
    trajectories: u32,
    holidays: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let reference_date = Date::parse(reference_date)?;
    let forecast_date = Date::parse(forecast_date)?;
    let price = parse_decimal(price)?;
    let volatility = parse_decimal(volatility)?;

    let product = Product::new(reference_date, price, volatility)?;
    let calendar = match holidays {
        Some(path) => load_holidays(path)?,
        None => HolidayCalendar::new([]),
    };

    info!("Starting forecast...");
    info!("  Reference date: {}", product.reference_date());
    info!("  Price: {}", product.price());
    info!("  Forecast date: {}", forecast_date);
    info!("  Trajectories: {}", trajectories);
    info!("  Holidays: {}", calendar.len());

    let forecast = match seed {
        Some(seed) => {
            info!("  Seed: {}", seed);
            run_forecast(
                calendar,
                SeededSlopeRandomizer::from_seed(seed),
                &product,
                forecast_date,
                trajectories,
            )?
        }
        None => run_forecast(
            calendar,
            ThreadRngSlopeRandomizer,
            &product,
            forecast_date,
            trajectories,
        )?,
    };

    info!("Forecast complete");
    println!("{}", forecast);
    Ok(())
}

fn run_forecast<R>(
    calendar: HolidayCalendar,
    randomizer: R,
    product: &Product,
    forecast_date: Date,
    trajectories: u32,
) -> Result<Decimal>
where
    R: SlopeRandomizer + Sync,
{
    let forecaster = PriceForecaster::new(calendar, randomizer);
    Ok(forecaster.forecast_with_monte_carlo(product, forecast_date, trajectories)?)
}

fn parse_decimal(value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|err| CliError::InvalidNumber {
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Loads a holiday calendar from a file with one YYYY-MM-DD date per
/// line. Blank lines and lines starting with `#` are skipped.
fn load_holidays(path: &str) -> Result<HolidayCalendar> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::HolidayFile {
        path: path.to_string(),
        source,
    })?;

    let mut holidays = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        holidays.push(Date::parse(line)?);
    }
    Ok(HolidayCalendar::new(holidays))
}
