//! Open-Meteo Forecast API client
//!
//! Fetches hourly wind forecasts (the atmospheric provider) and parses them
//! into the engine's provider-neutral hourly arrays. Wave and wind data come
//! from separate Open-Meteo models, so the caller aligns the two feeds by
//! requesting the same date range and timezone from both.

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::WindHourly;

/// Base URL for the Open-Meteo Forecast API
const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Errors that can occur when fetching wind data
#[derive(Debug, Error)]
pub enum ForecastError {
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

/// Client for fetching wind forecasts from the Open-Meteo Forecast API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    timezone: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Create a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timezone: "America/Sao_Paulo".to_string(),
        }
    }

    /// Create a new ForecastClient with a custom timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Fetch hourly wind data for the given coordinates and date range
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    /// * `start` - First forecast day (inclusive)
    /// * `end` - Last forecast day (inclusive)
    ///
    /// # Returns
    /// * `Ok(WindHourly)` - Parsed hourly wind arrays
    /// * `Err(ForecastError)` - If the request or parsing fails
    pub async fn fetch_hourly(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<WindHourly, ForecastError> {
        let url = format!(
            "{}?latitude={}&longitude={}&hourly=wind_speed_10m,wind_direction_10m&start_date={}&end_date={}&timezone={}",
            FORECAST_BASE_URL, lat, lon, start, end, self.timezone
        );

        log::debug!("fetching wind forecast: {}", url);
        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let api_response: ForecastResponse = serde_json::from_str(&text)?;

        parse_hourly(api_response.hourly)
    }
}

/// Parse the wind hourly arrays into the engine input structure
fn parse_hourly(hourly: WindHourlyRaw) -> Result<WindHourly, ForecastError> {
    let len = hourly.time.len();
    if hourly.wind_speed_10m.len() != len || hourly.wind_direction_10m.len() != len {
        return Err(ForecastError::MalformedHourly(
            "hourly arrays have inconsistent lengths".to_string(),
        ));
    }

    let time = hourly
        .time
        .iter()
        .map(|t| parse_datetime(t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WindHourly {
        time,
        wind_speed: hourly.wind_speed_10m,
        wind_direction: hourly.wind_direction_10m,
    })
}

/// Parse a datetime string in ISO 8601 format (e.g., "2024-07-15T05:00") to NaiveDateTime
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, ForecastError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| ForecastError::InvalidTimeFormat(datetime_str.to_string()))
}

/// Open-Meteo Forecast API response structure
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: WindHourlyRaw,
}

/// Hourly wind arrays as returned by the API
#[derive(Debug, Deserialize)]
struct WindHourlyRaw {
    time: Vec<String>,
    wind_speed_10m: Vec<Option<f64>>,
    wind_direction_10m: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid Open-Meteo Forecast API response
    const VALID_RESPONSE: &str = r#"{
        "latitude": -22.875,
        "longitude": -42.5,
        "generationtime_ms": 0.11,
        "utc_offset_seconds": -10800,
        "timezone": "America/Sao_Paulo",
        "timezone_abbreviation": "-03",
        "elevation": 4.0,
        "hourly_units": {
            "time": "iso8601",
            "wind_speed_10m": "km/h",
            "wind_direction_10m": "°"
        },
        "hourly": {
            "time": ["2024-07-15T00:00", "2024-07-15T01:00"],
            "wind_speed_10m": [7.9, null],
            "wind_direction_10m": [352.0, null]
        }
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let response: ForecastResponse =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");
        let hourly = parse_hourly(response.hourly).expect("Failed to parse hourly arrays");

        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.wind_speed[0], Some(7.9));
        assert_eq!(hourly.wind_direction[0], Some(352.0));
        assert_eq!(hourly.wind_speed[1], None);
    }

    #[test]
    fn test_parse_rejects_ragged_arrays() {
        let raw = WindHourlyRaw {
            time: vec!["2024-07-15T00:00".to_string(), "2024-07-15T01:00".to_string()],
            wind_speed_10m: vec![Some(7.9)],
            wind_direction_10m: vec![Some(352.0), Some(10.0)],
        };

        let result = parse_hourly(raw);
        assert!(matches!(result, Err(ForecastError::MalformedHourly(_))));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let raw = WindHourlyRaw {
            time: vec!["15/07/2024 00:00".to_string()],
            wind_speed_10m: vec![Some(7.9)],
            wind_direction_10m: vec![Some(352.0)],
        };

        let result = parse_hourly(raw);
        assert!(matches!(result, Err(ForecastError::InvalidTimeFormat(_))));
    }

    #[test]
    fn test_parse_missing_hourly_block() {
        let missing = r#"{"latitude": -22.875, "longitude": -42.5}"#;
        let result: Result<ForecastResponse, _> = serde_json::from_str(missing);
        assert!(result.is_err());
    }
}
