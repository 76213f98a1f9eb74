//! Static surf spot data
//!
//! This module contains the static list of supported surf spots with their
//! geographic coordinates and site-specific scoring thresholds.

use crate::direction::Cardinal;
use crate::engine::RatingConfig;

use super::Spot;

/// Static array of all supported surf spots
///
/// Itaúna is the canonical spot; the other Saquarema-area breaks share its
/// coastline orientation but differ in favorable wind quadrants.
pub static SPOTS: [Spot; 3] = [
    Spot {
        id: "itauna",
        name: "Itaúna (Saquarema)",
        latitude: -22.93668,
        longitude: -42.48337,
        timezone: "America/Sao_Paulo",
        wind_favorable: &[Cardinal::N, Cardinal::NE, Cardinal::NW],
        swell_arc: (90.0, 150.0),
    },
    Spot {
        id: "barrinha",
        name: "Barrinha (Saquarema)",
        latitude: -22.9338,
        longitude: -42.4972,
        timezone: "America/Sao_Paulo",
        wind_favorable: &[Cardinal::N, Cardinal::NW],
        swell_arc: (100.0, 160.0),
    },
    Spot {
        id: "vilatur",
        name: "Vilatur (Saquarema)",
        latitude: -22.9401,
        longitude: -42.4305,
        timezone: "America/Sao_Paulo",
        wind_favorable: &[Cardinal::N, Cardinal::NE],
        swell_arc: (90.0, 140.0),
    },
];

/// Get a spot by its ID
///
/// # Arguments
///
/// * `id` - The unique identifier for the spot (e.g., "itauna")
///
/// # Returns
///
/// Returns `Some(&Spot)` if found, `None` otherwise
pub fn get_spot_by_id(id: &str) -> Option<&'static Spot> {
    SPOTS.iter().find(|spot| spot.id == id)
}

/// Returns all supported spots.
pub fn all_spots() -> &'static [Spot] {
    &SPOTS
}

impl Spot {
    /// Builds the scoring configuration for this spot: shared defaults with
    /// the site's favorable wind set and swell arc applied.
    pub fn rating_config(&self) -> RatingConfig {
        RatingConfig {
            wind_favorable_directions: self.wind_favorable.to_vec(),
            swell_favorable_arc: self.swell_arc,
            ..RatingConfig::default()
        }
    }
}
