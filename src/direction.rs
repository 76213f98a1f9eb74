//! Compass direction handling for wave and wind bearings.
//!
//! Provides the eight-point cardinal rose used throughout the bulletin and a
//! circular mean that is correct across the 0°/360° wraparound.

use crate::engine::EngineError;
use serde::{Deserialize, Serialize};

/// One of the eight compass points, each covering a 45° sector centered on
/// its exact bearing (N = 0°, NE = 45°, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Cardinal {
    /// Returns a slice containing all cardinal variants, clockwise from north.
    pub fn all() -> &'static [Cardinal] {
        &[
            Cardinal::N,
            Cardinal::NE,
            Cardinal::E,
            Cardinal::SE,
            Cardinal::S,
            Cardinal::SW,
            Cardinal::W,
            Cardinal::NW,
        ]
    }

    /// Returns the display label for the cardinal.
    pub fn label(&self) -> &'static str {
        match self {
            Cardinal::N => "N",
            Cardinal::NE => "NE",
            Cardinal::E => "E",
            Cardinal::SE => "SE",
            Cardinal::S => "S",
            Cardinal::SW => "SW",
            Cardinal::W => "W",
            Cardinal::NW => "NW",
        }
    }

    /// Converts a bearing in degrees to its cardinal sector.
    ///
    /// The bearing is normalized into [0, 360) first, so any finite input is
    /// valid and `from_degrees(d)` equals `from_degrees(d + 360)`. Sector
    /// assignment is `round(degrees / 45) mod 8`, giving each cardinal a
    /// ±22.5° half-width around its exact bearing.
    pub fn from_degrees(degrees: f64) -> Cardinal {
        let normalized = degrees.rem_euclid(360.0);
        let bucket = (normalized / 45.0).round() as usize % 8;
        Cardinal::all()[bucket]
    }
}

impl std::fmt::Display for Cardinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Computes the mean bearing of a set of directions in degrees.
///
/// Uses the angular mean of unit vectors (summed cos/sin components and
/// `atan2`) so that wraparound is handled correctly: the mean of 350° and 10°
/// is 0°, not 180°. The result is normalized into [0, 360).
///
/// Callers must filter out missing readings first; an empty slice is an
/// `EngineError::InvalidInput`.
pub fn circular_mean(degrees: &[f64]) -> Result<f64, EngineError> {
    if degrees.is_empty() {
        return Err(EngineError::InvalidInput(
            "circular mean of an empty direction set".to_string(),
        ));
    }

    let (sin_sum, cos_sum) = degrees.iter().fold((0.0_f64, 0.0_f64), |(s, c), d| {
        let radians = d.to_radians();
        (s + radians.sin(), c + radians.cos())
    });

    let mean = sin_sum.atan2(cos_sum).to_degrees();
    Ok(mean.rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_exact_bearings() {
        assert_eq!(Cardinal::from_degrees(0.0), Cardinal::N);
        assert_eq!(Cardinal::from_degrees(45.0), Cardinal::NE);
        assert_eq!(Cardinal::from_degrees(90.0), Cardinal::E);
        assert_eq!(Cardinal::from_degrees(135.0), Cardinal::SE);
        assert_eq!(Cardinal::from_degrees(180.0), Cardinal::S);
        assert_eq!(Cardinal::from_degrees(225.0), Cardinal::SW);
        assert_eq!(Cardinal::from_degrees(270.0), Cardinal::W);
        assert_eq!(Cardinal::from_degrees(315.0), Cardinal::NW);
    }

    #[test]
    fn test_from_degrees_sector_boundaries() {
        // Each sector extends 22.5° to either side of the exact bearing.
        assert_eq!(Cardinal::from_degrees(22.4), Cardinal::N);
        assert_eq!(Cardinal::from_degrees(22.5), Cardinal::NE);
        assert_eq!(Cardinal::from_degrees(337.5), Cardinal::N);
        assert_eq!(Cardinal::from_degrees(337.4), Cardinal::NW);
        assert_eq!(Cardinal::from_degrees(359.9), Cardinal::N);
    }

    #[test]
    fn test_from_degrees_wraps_full_turns() {
        for d in [0.0, 10.0, 119.7, 250.0, 359.0] {
            assert_eq!(
                Cardinal::from_degrees(d),
                Cardinal::from_degrees(d + 360.0),
                "bearing {} should match {} + 360",
                d,
                d
            );
        }
    }

    #[test]
    fn test_from_degrees_negative_bearing() {
        assert_eq!(Cardinal::from_degrees(-45.0), Cardinal::NW);
        assert_eq!(Cardinal::from_degrees(-90.0), Cardinal::W);
    }

    #[test]
    fn test_circular_mean_simple_average() {
        let mean = circular_mean(&[80.0, 100.0]).unwrap();
        assert!((mean - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_circular_mean_wraparound() {
        // Naive arithmetic mean would give 180; the true mean bearing is 0.
        let mean = circular_mean(&[350.0, 10.0]).unwrap();
        let distance_from_north = mean.min(360.0 - mean);
        assert!(
            distance_from_north < 1e-9,
            "mean of 350 and 10 should be 0, got {}",
            mean
        );
    }

    #[test]
    fn test_circular_mean_single_value() {
        let mean = circular_mean(&[123.0]).unwrap();
        assert!((mean - 123.0).abs() < 1e-9);
    }

    #[test]
    fn test_circular_mean_result_in_range() {
        let mean = circular_mean(&[200.0, 300.0, 340.0]).unwrap();
        assert!((0.0..360.0).contains(&mean));
    }

    #[test]
    fn test_circular_mean_empty_is_invalid_input() {
        let result = circular_mean(&[]);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_cardinal_labels() {
        assert_eq!(Cardinal::N.label(), "N");
        assert_eq!(Cardinal::SE.label(), "SE");
        assert_eq!(format!("{}", Cardinal::NW), "NW");
    }
}
