//! Disk cache for fetched forecast bundles
//!
//! Keeps the last Open-Meteo responses per spot and date range so the CLI can
//! answer quickly on repeat runs and degrade gracefully when the APIs are
//! unreachable.

pub mod store;

pub use store::{CachedBundle, ForecastBundle, ForecastCache};
