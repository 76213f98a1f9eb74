//! Condition classifier: maps a day summary to a star rating and narrative.
//!
//! The rating is a sum of independently-evaluated factors, one star each,
//! capped at five. All thresholds live in [`RatingConfig`] so per-spot
//! deployments can tune them without touching the rule logic.

use serde::{Deserialize, Serialize};

use crate::direction::Cardinal;

use super::summary::DaySummary;

/// Named thresholds for classification and window detection.
///
/// Defaults suit a south-facing Atlantic beach break: waist-to-overhead
/// size, 8 s+ swell, light wind from the northern (offshore) quadrant, and
/// S/SE-leaning swell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Lower edge of the favorable wave-height band in meters
    pub size_band_min: f64,
    /// Upper edge of the favorable wave-height band in meters
    pub size_band_max: f64,
    /// Minimum average swell period in seconds
    pub period_min: f64,
    /// Maximum tolerable wind speed in km/h
    pub wind_speed_max: f64,
    /// Wind cardinals that groom the waves at this spot
    pub wind_favorable_directions: Vec<Cardinal>,
    /// Inclusive bearing arc (degrees) of favorable swell
    pub swell_favorable_arc: (f64, f64),
    /// Height × period product that earns the energy bonus, in m·s
    pub energy_threshold: f64,
    /// Minimum wave height for an hour to qualify for the best window
    pub window_min_wave_height: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            size_band_min: 0.5,
            size_band_max: 2.0,
            period_min: 8.0,
            wind_speed_max: 12.0,
            wind_favorable_directions: vec![Cardinal::N, Cardinal::NE, Cardinal::NW],
            swell_favorable_arc: (90.0, 150.0),
            energy_threshold: 10.0,
            window_min_wave_height: 0.8,
        }
    }
}

impl RatingConfig {
    /// True when the bearing lies inside the favorable swell arc (inclusive).
    pub fn bearing_in_swell_arc(&self, bearing: f64) -> bool {
        let (low, high) = self.swell_favorable_arc;
        let normalized = bearing.rem_euclid(360.0);
        if low <= high {
            (low..=high).contains(&normalized)
        } else {
            // Arc crossing north, e.g. 330°..30°.
            normalized >= low || normalized <= high
        }
    }

    /// True when the wind cardinal is in the favorable set.
    pub fn wind_is_favorable(&self, direction: Cardinal) -> bool {
        self.wind_favorable_directions.contains(&direction)
    }
}

/// Narrative tier for a day's conditions, chosen by star count with flat and
/// no-data overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narrative {
    /// No wave-height data for the day
    DataUnavailable,
    /// Zero wave height all day
    Flat,
    /// 0-1 stars
    WeakDisorganized,
    /// 2 stars
    FairSomePotential,
    /// 3 stars
    OkFunWaves,
    /// 4-5 stars
    GoodToExcellent,
}

impl Narrative {
    /// Returns the display text for the narrative.
    pub fn label(&self) -> &'static str {
        match self {
            Narrative::DataUnavailable => "data unavailable",
            Narrative::Flat => "flat, no surf",
            Narrative::WeakDisorganized => "weak, disorganized surf",
            Narrative::FairSomePotential => "fair, some potential",
            Narrative::OkFunWaves => "ok, fun waves",
            Narrative::GoodToExcellent => "good to excellent conditions",
        }
    }
}

/// A day's surfability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRating {
    /// Star count, 0-5
    pub stars: u8,
    /// Narrative tier matching the star count
    pub narrative: Narrative,
    /// True when wind readings were absent and factor C could not be scored;
    /// surfaced in the bulletin rather than silently ignored
    pub wind_data_missing: bool,
}

/// Narrative tier for a star count, before flat/no-data overrides.
fn narrative_for_stars(stars: u8) -> Narrative {
    match stars {
        0 | 1 => Narrative::WeakDisorganized,
        2 => Narrative::FairSomePotential,
        3 => Narrative::OkFunWaves,
        _ => Narrative::GoodToExcellent,
    }
}

/// Classifies a day summary into a [`ConditionRating`].
///
/// Factors, one star each, capped at five:
/// - size: average height inside the favorable band
/// - period: average period at or above the minimum
/// - wind: speed at or below the maximum and direction in the favorable set
/// - swell direction: mean bearing inside the favorable arc
/// - energy: height × period product at or above the threshold
///
/// A day with no wave-height data is 0 stars / data unavailable. A flat day
/// (average height exactly zero) never earns the size or energy stars.
/// Missing period or wind readings exclude that factor from scoring instead
/// of zeroing the day; missing wind is additionally flagged on the rating.
pub fn classify(summary: &DaySummary, config: &RatingConfig) -> ConditionRating {
    let avg_height = match summary.avg_wave_height {
        Some(h) => h,
        None => {
            return ConditionRating {
                stars: 0,
                narrative: Narrative::DataUnavailable,
                wind_data_missing: summary.avg_wind_speed.is_none(),
            }
        }
    };

    let flat = avg_height == 0.0;
    let mut stars = 0u8;

    // Factor A: size band.
    if !flat && avg_height >= config.size_band_min && avg_height <= config.size_band_max {
        stars += 1;
    }

    // Factor B: swell period.
    if let Some(period) = summary.avg_period {
        if period >= config.period_min {
            stars += 1;
        }
    }

    // Factor C: wind strength and direction. Skipped (not failed) when
    // either reading is absent.
    let wind_data_missing = summary.avg_wind_speed.is_none()
        || summary.dominant_wind_direction.is_none();
    if let (Some(speed), Some(direction)) =
        (summary.avg_wind_speed, summary.dominant_wind_direction)
    {
        if speed <= config.wind_speed_max && config.wind_is_favorable(direction) {
            stars += 1;
        }
    }

    // Factor D: swell direction alignment, tested on the raw mean bearing.
    if let Some(bearing) = summary.dominant_wave_bearing {
        if config.bearing_in_swell_arc(bearing) {
            stars += 1;
        }
    }

    // Factor E: energy bonus.
    if !flat {
        if let Some(period) = summary.avg_period {
            if avg_height * period >= config.energy_threshold {
                stars += 1;
            }
        }
    }

    let stars = stars.min(5);
    let narrative = if flat {
        Narrative::Flat
    } else {
        narrative_for_stars(stars)
    };

    ConditionRating {
        stars,
        narrative,
        wind_data_missing,
    }
}
