//! Bulletin builder: assembles per-day summaries, ratings, and windows into
//! the ordered report consumed by the presentation layer.

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::rating::{classify, ConditionRating, RatingConfig};
use super::series::HourlySeries;
use super::summary::{summarize_day, DaySummary};
use super::window::{best_window, peak_hour, BestWindow};
use super::EngineError;

/// One day of the surf report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletinEntry {
    pub date: NaiveDate,
    pub summary: DaySummary,
    pub rating: ConditionRating,
    pub window: BestWindow,
    /// Earliest hour carrying the day's biggest waves
    pub peak_hour: Option<NaiveTime>,
}

/// Chronologically ordered surf report, exactly one entry per requested day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bulletin {
    pub entries: Vec<BulletinEntry>,
}

/// Builds the bulletin for the inclusive date range `[start, end]`.
///
/// Every day in the range gets exactly one entry, in order. A day with no
/// samples degrades to an all-null summary, a 0-star "data unavailable"
/// rating, and the sentinel window; it never aborts the report. The only
/// errors are malformed inputs: an inverted range here, or a provider
/// mismatch when the series was constructed.
pub fn build(
    series: &HourlySeries,
    start: NaiveDate,
    end: NaiveDate,
    config: &RatingConfig,
) -> Result<Bulletin, EngineError> {
    if end < start {
        return Err(EngineError::InvalidInput(format!(
            "date range ends ({}) before it starts ({})",
            end, start
        )));
    }

    let groups = series.group_by_day();
    let samples = series.samples();
    let empty: Vec<usize> = Vec::new();

    let mut entries = Vec::new();
    let mut date = start;
    loop {
        let indices = groups.get(&date).unwrap_or(&empty);
        let summary = summarize_day(date, indices, samples);
        let rating = classify(&summary, config);
        let window = best_window(indices, samples, config);
        let peak = peak_hour(indices, samples);

        entries.push(BulletinEntry {
            date,
            summary,
            rating,
            window,
            peak_hour: peak,
        });

        if date == end {
            break;
        }
        date = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| EngineError::InvalidInput("date range overflows calendar".into()))?;
    }

    Ok(Bulletin { entries })
}
