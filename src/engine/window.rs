//! Best-window finder: locates the favorable stretch of hours within a day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::rating::RatingConfig;
use super::series::HourlySample;

/// The recommended time-of-day window, or a sentinel when no hour qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestWindow {
    /// Span from the first to the last qualifying hour. The hours in between
    /// are not guaranteed to qualify; this is the loose first-to-last
    /// contract.
    Span { start: NaiveTime, end: NaiveTime },
    /// No hour met the thresholds.
    NoIdealWindow,
}

impl BestWindow {
    /// "HH:MM" labels for the span, or `None` for the sentinel.
    pub fn labels(&self) -> Option<(String, String)> {
        match self {
            BestWindow::Span { start, end } => Some((
                start.format("%H:%M").to_string(),
                end.format("%H:%M").to_string(),
            )),
            BestWindow::NoIdealWindow => None,
        }
    }
}

/// True when the hour simultaneously satisfies every window threshold.
///
/// A missing reading disqualifies the hour; gaps are skipped, never assumed
/// favorable.
fn hour_qualifies(sample: &HourlySample, config: &RatingConfig) -> bool {
    let (height, wave_dir, wind_speed, wind_dir) = match (
        sample.wave_height,
        sample.wave_direction,
        sample.wind_speed,
        sample.wind_direction,
    ) {
        (Some(h), Some(wd), Some(ws), Some(wdir)) => (h, wd, ws, wdir),
        _ => return false,
    };

    height >= config.window_min_wave_height
        && config.bearing_in_swell_arc(wave_dir)
        && wind_speed <= config.wind_speed_max
        && config.wind_is_favorable(crate::direction::Cardinal::from_degrees(wind_dir))
}

/// Scans a day's hours for the favorable surf window.
///
/// Uses the same thresholds as the wind and swell-direction rating factors so
/// the window never contradicts the star rating. Reports the span from the
/// earliest to the latest qualifying hour, or [`BestWindow::NoIdealWindow`]
/// when none qualify.
pub fn best_window(
    indices: &[usize],
    samples: &[HourlySample],
    config: &RatingConfig,
) -> BestWindow {
    let mut qualifying = indices
        .iter()
        .filter_map(|&i| samples.get(i))
        .filter(|s| hour_qualifies(s, config))
        .map(|s| s.time.time());

    match qualifying.next() {
        None => BestWindow::NoIdealWindow,
        Some(first) => {
            let last = qualifying.last().unwrap_or(first);
            BestWindow::Span {
                start: first,
                end: last,
            }
        }
    }
}

/// The earliest hour carrying the day's maximum wave height.
///
/// Ties go to the earlier hour. `None` when the day has no height readings.
pub fn peak_hour(indices: &[usize], samples: &[HourlySample]) -> Option<NaiveTime> {
    let mut best: Option<(f64, NaiveTime)> = None;
    for &i in indices {
        let Some(sample) = samples.get(i) else {
            continue;
        };
        if let Some(height) = sample.wave_height {
            match best {
                Some((peak, _)) if height <= peak => {}
                _ => best = Some((height, sample.time.time())),
            }
        }
    }
    best.map(|(_, time)| time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(h: u32, wave: f64) -> HourlySample {
        HourlySample {
            time: NaiveDate::from_ymd_opt(2024, 7, 15)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap(),
            wave_height: Some(wave),
            wave_direction: Some(120.0),
            wind_wave_height: Some(0.2),
            swell_period: Some(9.0),
            wind_speed: Some(8.0),
            wind_direction: Some(0.0),
        }
    }

    #[test]
    fn test_best_window_spans_qualifying_hours() {
        let samples = vec![
            sample(6, 0.3),
            sample(9, 0.9),
            sample(12, 1.1),
            sample(15, 0.4),
        ];
        let window = best_window(&[0, 1, 2, 3], &samples, &RatingConfig::default());

        assert_eq!(
            window,
            BestWindow::Span {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            }
        );
        assert_eq!(
            window.labels(),
            Some(("09:00".to_string(), "12:00".to_string()))
        );
    }

    #[test]
    fn test_best_window_single_qualifying_hour() {
        let samples = vec![sample(6, 0.3), sample(9, 1.0)];
        let window = best_window(&[0, 1], &samples, &RatingConfig::default());

        assert_eq!(
            window,
            BestWindow::Span {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            }
        );
    }

    #[test]
    fn test_best_window_non_contiguous_reports_full_span() {
        let samples = vec![
            sample(6, 1.0),
            sample(9, 0.2), // dip below threshold mid-day
            sample(12, 1.0),
        ];
        let window = best_window(&[0, 1, 2], &samples, &RatingConfig::default());
        assert_eq!(
            window.labels(),
            Some(("06:00".to_string(), "12:00".to_string()))
        );
    }

    #[test]
    fn test_best_window_sentinel_when_nothing_qualifies() {
        let samples = vec![sample(6, 0.2), sample(9, 0.3)];
        let window = best_window(&[0, 1], &samples, &RatingConfig::default());
        assert_eq!(window, BestWindow::NoIdealWindow);
        assert!(window.labels().is_none());
    }

    #[test]
    fn test_best_window_unfavorable_wind_disqualifies() {
        let mut blown_out = sample(9, 1.5);
        blown_out.wind_direction = Some(180.0); // onshore
        let window = best_window(&[0], &[blown_out], &RatingConfig::default());
        assert_eq!(window, BestWindow::NoIdealWindow);
    }

    #[test]
    fn test_best_window_skips_hours_with_gaps() {
        let mut gap = sample(9, 1.5);
        gap.wind_speed = None;
        let samples = vec![gap, sample(12, 1.0)];
        let window = best_window(&[0, 1], &samples, &RatingConfig::default());
        assert_eq!(
            window.labels(),
            Some(("12:00".to_string(), "12:00".to_string()))
        );
    }

    #[test]
    fn test_best_window_empty_day() {
        let window = best_window(&[], &[], &RatingConfig::default());
        assert_eq!(window, BestWindow::NoIdealWindow);
    }

    #[test]
    fn test_peak_hour_earliest_wins_on_tie() {
        let samples = vec![sample(6, 1.1), sample(9, 1.1), sample(12, 0.8)];
        assert_eq!(
            peak_hour(&[0, 1, 2], &samples),
            Some(NaiveTime::from_hms_opt(6, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_peak_hour_skips_null_heights() {
        let mut gap = sample(6, 0.0);
        gap.wave_height = None;
        let samples = vec![gap, sample(9, 0.4)];
        assert_eq!(
            peak_hour(&[0, 1], &samples),
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_peak_hour_none_without_data() {
        assert_eq!(peak_hour(&[], &[]), None);
    }
}
