//! Data providers and spot registry for SurfCheck
//!
//! This module contains the two Open-Meteo API clients (marine waves,
//! atmospheric wind) and the static registry of supported surf spots. The
//! clients translate provider responses into the engine's neutral hourly
//! arrays; everything downstream of that boundary is pure.

pub mod forecast;
pub mod marine;
pub mod spot;

pub use forecast::{ForecastClient, ForecastError};
pub use marine::{MarineClient, MarineError};
pub use spot::{all_spots, get_spot_by_id};

use crate::direction::Cardinal;
use serde::Serialize;

/// A supported surf spot
///
/// Uses `&'static str` for string fields to allow static initialization of
/// the SPOTS array. Site-specific scoring thresholds (favorable wind
/// quadrant, swell arc) live here so each spot yields its own rating
/// configuration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Spot {
    /// Unique identifier for the spot
    pub id: &'static str,
    /// Human-readable name of the spot
    pub name: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// IANA timezone requested from both providers
    pub timezone: &'static str,
    /// Wind cardinals that blow offshore at this spot
    pub wind_favorable: &'static [Cardinal],
    /// Inclusive favorable swell bearing arc in degrees
    pub swell_arc: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_creation() {
        let spot = Spot {
            id: "itauna",
            name: "Itaúna (Saquarema)",
            latitude: -22.93668,
            longitude: -42.48337,
            timezone: "America/Sao_Paulo",
            wind_favorable: &[Cardinal::N],
            swell_arc: (90.0, 150.0),
        };

        assert_eq!(spot.id, "itauna");
        assert_eq!(spot.timezone, "America/Sao_Paulo");
        assert_eq!(spot.wind_favorable, &[Cardinal::N]);
    }
}
