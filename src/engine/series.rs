//! Hourly series store and daily grouper.
//!
//! Merges the two provider feeds (marine waves, atmospheric wind) into one
//! chronological sample sequence and partitions it by calendar day.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::EngineError;

/// One hour of combined marine and wind readings.
///
/// Every metric is optional: Open-Meteo reports `null` for hours a model did
/// not cover, and consumers exclude those readings from averages and window
/// detection rather than substituting placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySample {
    /// Forecast hour in the spot's timezone
    pub time: NaiveDateTime,
    /// Significant wave height in meters
    pub wave_height: Option<f64>,
    /// Mean wave direction in degrees
    pub wave_direction: Option<f64>,
    /// Wind-driven wave height in meters
    pub wind_wave_height: Option<f64>,
    /// Swell period in seconds
    pub swell_period: Option<f64>,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees
    pub wind_direction: Option<f64>,
}

/// Hourly arrays from the marine provider, keyed by a shared timestamp axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarineHourly {
    pub time: Vec<NaiveDateTime>,
    pub wave_height: Vec<Option<f64>>,
    pub wave_direction: Vec<Option<f64>>,
    pub wind_wave_height: Vec<Option<f64>>,
    pub swell_period: Vec<Option<f64>>,
}

/// Hourly arrays from the atmospheric provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindHourly {
    pub time: Vec<NaiveDateTime>,
    pub wind_speed: Vec<Option<f64>>,
    pub wind_direction: Vec<Option<f64>>,
}

/// Chronological, duplicate-free sequence of hourly samples for one
/// contiguous date range.
#[derive(Debug, Clone)]
pub struct HourlySeries {
    samples: Vec<HourlySample>,
}

impl HourlySeries {
    /// Merges the two provider feeds into a single series.
    ///
    /// The providers must already be aligned: identical timestamp arrays in
    /// strictly ascending order. Disagreement between the two axes is a
    /// `SeriesMismatch`; ragged arrays within one provider are an
    /// `InvalidInput`. Callers resolve alignment (for example by intersecting
    /// on timestamp) before building the series.
    pub fn from_providers(marine: &MarineHourly, wind: &WindHourly) -> Result<Self, EngineError> {
        let len = marine.time.len();

        if marine.wave_height.len() != len
            || marine.wave_direction.len() != len
            || marine.wind_wave_height.len() != len
            || marine.swell_period.len() != len
        {
            return Err(EngineError::InvalidInput(
                "marine hourly arrays have inconsistent lengths".to_string(),
            ));
        }
        if wind.wind_speed.len() != wind.time.len() || wind.wind_direction.len() != wind.time.len()
        {
            return Err(EngineError::InvalidInput(
                "wind hourly arrays have inconsistent lengths".to_string(),
            ));
        }

        if wind.time.len() != len {
            return Err(EngineError::SeriesMismatch(format!(
                "marine has {} hours, wind has {}",
                len,
                wind.time.len()
            )));
        }
        if let Some(position) = marine.time.iter().zip(&wind.time).position(|(m, w)| m != w) {
            return Err(EngineError::SeriesMismatch(format!(
                "timestamp axes diverge at index {}: marine {} vs wind {}",
                position, marine.time[position], wind.time[position]
            )));
        }
        if let Some(pair) = marine.time.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(EngineError::SeriesMismatch(format!(
                "timestamps not strictly ascending around {}",
                pair[0]
            )));
        }

        let samples = (0..len)
            .map(|i| HourlySample {
                time: marine.time[i],
                wave_height: marine.wave_height[i],
                wave_direction: marine.wave_direction[i],
                wind_wave_height: marine.wind_wave_height[i],
                swell_period: marine.swell_period[i],
                wind_speed: wind.wind_speed[i],
                wind_direction: wind.wind_direction[i],
            })
            .collect();

        Ok(Self { samples })
    }

    /// Returns the samples in chronological order.
    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }

    /// Partitions sample indices by calendar date.
    ///
    /// Indices within a day stay in chronological order. Days absent from the
    /// series simply have no entry here; the bulletin builder treats them as
    /// valid empty groups.
    pub fn group_by_day(&self) -> BTreeMap<NaiveDate, Vec<usize>> {
        let mut groups: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for (index, sample) in self.samples.iter().enumerate() {
            groups.entry(sample.time.date()).or_default().push(index);
        }
        groups
    }
}
