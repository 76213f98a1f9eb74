//! Open-Meteo Marine API client
//!
//! Fetches hourly wave forecasts from the Open-Meteo Marine API and parses
//! them into the engine's provider-neutral hourly arrays.

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::MarineHourly;

/// Base URL for the Open-Meteo Marine API
const MARINE_BASE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

/// Errors that can occur when fetching marine data
#[derive(Debug, Error)]
pub enum MarineError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Hourly arrays disagree on length
    #[error("Malformed hourly data: {0}")]
    MalformedHourly(String),

    /// Invalid time format in response
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Client for fetching wave forecasts from the Open-Meteo Marine API
#[derive(Debug, Clone)]
pub struct MarineClient {
    client: Client,
    timezone: String,
}

impl Default for MarineClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MarineClient {
    /// Create a new MarineClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timezone: "America/Sao_Paulo".to_string(),
        }
    }

    /// Create a new MarineClient with a custom timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Fetch hourly wave data for the given coordinates and date range
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    /// * `start` - First forecast day (inclusive)
    /// * `end` - Last forecast day (inclusive)
    ///
    /// # Returns
    /// * `Ok(MarineHourly)` - Parsed hourly wave arrays
    /// * `Err(MarineError)` - If the request or parsing fails
    pub async fn fetch_hourly(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<MarineHourly, MarineError> {
        let url = format!(
            "{}?latitude={}&longitude={}&hourly=wave_height,wave_direction,wind_wave_height,swell_wave_period&start_date={}&end_date={}&timezone={}",
            MARINE_BASE_URL, lat, lon, start, end, self.timezone
        );

        log::debug!("fetching marine forecast: {}", url);
        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let api_response: MarineResponse = serde_json::from_str(&text)?;

        parse_hourly(api_response.hourly)
    }
}

/// Parse the marine hourly arrays into the engine input structure
fn parse_hourly(hourly: MarineHourlyRaw) -> Result<MarineHourly, MarineError> {
    let len = hourly.time.len();
    if hourly.wave_height.len() != len
        || hourly.wave_direction.len() != len
        || hourly.wind_wave_height.len() != len
        || hourly.swell_wave_period.len() != len
    {
        return Err(MarineError::MalformedHourly(
            "hourly arrays have inconsistent lengths".to_string(),
        ));
    }

    let time = hourly
        .time
        .iter()
        .map(|t| parse_datetime(t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MarineHourly {
        time,
        wave_height: hourly.wave_height,
        wave_direction: hourly.wave_direction,
        wind_wave_height: hourly.wind_wave_height,
        swell_period: hourly.swell_wave_period,
    })
}

/// Parse a datetime string in ISO 8601 format (e.g., "2024-07-15T05:00") to NaiveDateTime
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, MarineError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| MarineError::InvalidTimeFormat(datetime_str.to_string()))
}

/// Open-Meteo Marine API response structure
#[derive(Debug, Deserialize)]
struct MarineResponse {
    hourly: MarineHourlyRaw,
}

/// Hourly wave arrays as returned by the API; `null` readings stay `None`
#[derive(Debug, Deserialize)]
struct MarineHourlyRaw {
    time: Vec<String>,
    wave_height: Vec<Option<f64>>,
    wave_direction: Vec<Option<f64>>,
    wind_wave_height: Vec<Option<f64>>,
    swell_wave_period: Vec<Option<f64>>,
}
