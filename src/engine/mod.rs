//! Forecast aggregation and condition-scoring engine.
//!
//! Pure, synchronous core: raw hourly provider arrays flow through series
//! alignment, daily grouping, summarization, classification, and window
//! detection into a [`bulletin::Bulletin`]. No I/O, no clocks, no shared
//! state; the same inputs always yield the same bulletin.

pub mod bulletin;
pub mod rating;
pub mod series;
pub mod summary;
pub mod window;

pub use bulletin::{build, Bulletin, BulletinEntry};
pub use rating::{classify, ConditionRating, Narrative, RatingConfig};
pub use series::{HourlySample, HourlySeries, MarineHourly, WindHourly};
pub use summary::{summarize_day, DaySummary};
pub use window::{best_window, peak_hour, BestWindow};

use thiserror::Error;

/// Errors raised by the engine for malformed inputs.
///
/// Missing forecast data is never an error: a day without samples degrades to
/// a "no data" bulletin entry instead of aborting the report.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pure function received input it cannot operate on (empty direction
    /// set, inverted date range).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The marine and wind provider series cannot be aligned on a shared
    /// timestamp axis.
    #[error("provider series mismatch: {0}")]
    SeriesMismatch(String),
}
