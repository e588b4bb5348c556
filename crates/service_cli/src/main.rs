//! Triwalk CLI - Command Line Price Forecasting
//!
//! This is the operational entry point for the trinomial walk
//! forecasting library.
//!
//! # Commands
//!
//! - `triwalk forecast` - Forecast a product price over open days
//!
//! # Architecture
//!
//! As the service layer, this crate wires the calendar, randomizer and
//! forecasting engine together behind a command-line interface. All
//! business rules live in `forecast_core` and `forecast_engine`; this
//! binary only parses arguments, loads holiday files and formats output.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Trinomial walk price forecaster CLI
#[derive(Parser)]
#[command(name = "triwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a product price at a future date
    Forecast {
        /// Product reference date (YYYY-MM-DD)
        #[arg(short, long)]
        reference_date: String,

        /// Product price at the reference date
        #[arg(short, long)]
        price: String,

        /// Daily volatility as a percentage, strictly between 0 and 100
        #[arg(short = 'o', long)]
        volatility: String,

        /// Date to forecast the price at (YYYY-MM-DD)
        #[arg(short, long)]
        forecast_date: String,

        /// Number of Monte Carlo trajectories to average
        #[arg(short, long, default_value = "10000")]
        trajectories: u32,

        /// Holiday file, one YYYY-MM-DD date per line
        #[arg(long)]
        holidays: Option<String>,

        /// Seed for a reproducible run; omits the thread-local generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Forecast {
            reference_date,
            price,
            volatility,
            forecast_date,
            trajectories,
            holidays,
            seed,
        } => commands::forecast::run(
            &reference_date,
            &price,
            &volatility,
            &forecast_date,
            trajectories,
            holidays.as_deref(),
            seed,
        ),
    }
}
