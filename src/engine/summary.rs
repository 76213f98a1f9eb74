//! Day summarizer: reduces one day's hourly samples to representative scalars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::direction::{circular_mean, Cardinal};

use super::series::HourlySample;

/// Representative statistics for one calendar day.
///
/// Every field except the date is optional: an empty day (no samples at all)
/// produces an all-`None` summary, which is distinct from a flat day where
/// wave heights really are zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Highest wave height of the day in meters
    pub peak_wave_height: Option<f64>,
    /// Mean wave height in meters
    pub avg_wave_height: Option<f64>,
    /// Mean swell period in seconds; `None` when the provider reported no
    /// periods, never a placeholder
    pub avg_period: Option<f64>,
    /// Mean wind speed in km/h
    pub avg_wind_speed: Option<f64>,
    /// Circular-mean wave bearing in degrees, kept alongside the cardinal so
    /// the classifier can test it against the favorable swell arc
    pub dominant_wave_bearing: Option<f64>,
    /// Cardinal of the dominant wave bearing
    pub dominant_wave_direction: Option<Cardinal>,
    /// Cardinal of the circular-mean wind bearing
    pub dominant_wind_direction: Option<Cardinal>,
}

impl DaySummary {
    /// True when the day had no usable wave-height readings at all.
    pub fn has_no_wave_data(&self) -> bool {
        self.avg_wave_height.is_none()
    }
}

/// Arithmetic mean of the present values, `None` when none are present.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Collects the non-null readings selected by `field` for the day's indices.
fn present<F>(indices: &[usize], samples: &[HourlySample], field: F) -> Vec<f64>
where
    F: Fn(&HourlySample) -> Option<f64>,
{
    indices
        .iter()
        .filter_map(|&i| samples.get(i).and_then(&field))
        .collect()
}

/// Reduces one day's index group to a [`DaySummary`].
///
/// Null readings are excluded from each statistic independently, so a day can
/// have a wave summary but no period average. Directions use the circular
/// mean; a numeric bearing always maps to a cardinal, so direction fields are
/// `None` only when no bearings were reported at all.
pub fn summarize_day(date: NaiveDate, indices: &[usize], samples: &[HourlySample]) -> DaySummary {
    let heights = present(indices, samples, |s| s.wave_height);
    let periods = present(indices, samples, |s| s.swell_period);
    let wind_speeds = present(indices, samples, |s| s.wind_speed);
    let wave_bearings = present(indices, samples, |s| s.wave_direction);
    let wind_bearings = present(indices, samples, |s| s.wind_direction);

    let peak_wave_height = heights.iter().copied().fold(None, |peak: Option<f64>, h| {
        Some(peak.map_or(h, |p| p.max(h)))
    });

    let dominant_wave_bearing = circular_mean(&wave_bearings).ok();
    let dominant_wind_bearing = circular_mean(&wind_bearings).ok();

    DaySummary {
        date,
        peak_wave_height,
        avg_wave_height: mean(&heights),
        avg_period: mean(&periods),
        avg_wind_speed: mean(&wind_speeds),
        dominant_wave_bearing,
        dominant_wave_direction: dominant_wave_bearing.map(Cardinal::from_degrees),
        dominant_wind_direction: dominant_wind_bearing.map(Cardinal::from_degrees),
    }
}
