//! Command-line interface parsing for SurfCheck
//!
//! Handles spot selection, the forecast period (mirroring the original
//! today / tomorrow / next-3-days choices, plus explicit dates), and
//! per-invocation overrides of the scoring thresholds.

use chrono::{Days, NaiveDate};
use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::data::{get_spot_by_id, Spot};
use crate::engine::RatingConfig;

/// Error types for CLI argument resolution
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified spot ID is not in the registry
    #[error("Unknown spot: '{0}'. Valid spots: itauna, barrinha, vilatur")]
    UnknownSpot(String),

    /// Explicit dates were given but do not form a valid range
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
}

/// Relative forecast periods, matching the choices the original bot offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    /// Today only
    Today,
    /// Tomorrow only
    Tomorrow,
    /// Tomorrow through the day after next
    #[value(name = "3days")]
    ThreeDays,
}

/// SurfCheck - surf condition bulletins for Saquarema spots
#[derive(Parser, Debug)]
#[command(name = "surfcheck")]
#[command(about = "Surf forecast bulletins from Open-Meteo marine and wind data")]
#[command(version)]
pub struct Cli {
    /// Surf spot to report on
    #[arg(long, default_value = "itauna")]
    pub spot: String,

    /// Forecast period relative to today
    #[arg(long, value_enum, default_value = "today")]
    pub period: Period,

    /// Explicit first day of the range (overrides --period; requires --end)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: Option<NaiveDate>,

    /// Explicit last day of the range (requires --start)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: Option<NaiveDate>,

    /// Override the maximum favorable wind speed in km/h
    #[arg(long, value_name = "KMH")]
    pub max_wind: Option<f64>,

    /// Override the minimum favorable swell period in seconds
    #[arg(long, value_name = "SECONDS")]
    pub min_period: Option<f64>,

    /// Override the lower edge of the favorable size band in meters
    #[arg(long, value_name = "METERS")]
    pub min_size: Option<f64>,

    /// Override the upper edge of the favorable size band in meters
    #[arg(long, value_name = "METERS")]
    pub max_size: Option<f64>,
}

impl Cli {
    /// Looks up the requested spot in the registry.
    pub fn resolve_spot(&self) -> Result<&'static Spot, CliError> {
        get_spot_by_id(&self.spot).ok_or_else(|| CliError::UnknownSpot(self.spot.clone()))
    }

    /// Resolves the requested period to an inclusive date range.
    ///
    /// `today` is passed in rather than read from the clock so resolution is
    /// deterministic and testable.
    pub fn resolve_range(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), CliError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                if end < start {
                    Err(CliError::InvalidRange(format!(
                        "end {} is before start {}",
                        end, start
                    )))
                } else {
                    Ok((start, end))
                }
            }
            (Some(_), None) | (None, Some(_)) => Err(CliError::InvalidRange(
                "--start and --end must be given together".to_string(),
            )),
            (None, None) => {
                let tomorrow = today + Days::new(1);
                Ok(match self.period {
                    Period::Today => (today, today),
                    Period::Tomorrow => (tomorrow, tomorrow),
                    Period::ThreeDays => (tomorrow, today + Days::new(3)),
                })
            }
        }
    }

    /// Applies any threshold override flags on top of the spot's config.
    pub fn apply_overrides(&self, mut config: RatingConfig) -> RatingConfig {
        if let Some(max_wind) = self.max_wind {
            config.wind_speed_max = max_wind;
        }
        if let Some(min_period) = self.min_period {
            config.period_min = min_period;
        }
        if let Some(min_size) = self.min_size {
            config.size_band_min = min_size;
        }
        if let Some(max_size) = self.max_size {
            config.size_band_max = max_size;
        }
        config
    }
}
