//! Plain-text rendering of the bulletin
//!
//! The engine dictates field values and day ordering; this module owns how
//! they read on a terminal. One block per day: header with stars and
//! narrative, then summary lines, the best window, and any data caveats.

use crate::engine::{BestWindow, Bulletin, BulletinEntry, Narrative};

/// Renders the star row, filled to five (e.g. "★★★☆☆").
fn stars(count: u8) -> String {
    let filled = count.min(5) as usize;
    let mut row = "★".repeat(filled);
    row.push_str(&"☆".repeat(5 - filled));
    row
}

/// Renders one day's block.
fn render_entry(entry: &BulletinEntry) -> String {
    let mut lines = Vec::new();
    let date = entry.date.format("%d/%m");

    lines.push(format!(
        "{}  {}  {}",
        date,
        stars(entry.rating.stars),
        entry.rating.narrative.label()
    ));

    if entry.rating.narrative == Narrative::DataUnavailable {
        lines.push("  no forecast data for this day".to_string());
    } else {
        let summary = &entry.summary;

        let mut wave_line = match (summary.avg_wave_height, summary.peak_wave_height) {
            (Some(avg), Some(peak)) => format!("  waves {:.1} m (peak {:.1} m", avg, peak),
            _ => "  waves -".to_string(),
        };
        if let Some(peak_at) = entry.peak_hour {
            wave_line.push_str(&format!(" at {}", peak_at.format("%H:%M")));
        }
        if summary.peak_wave_height.is_some() {
            wave_line.push(')');
        }
        if let Some(direction) = summary.dominant_wave_direction {
            wave_line.push_str(&format!(", swell from {}", direction));
        }
        if let Some(period) = summary.avg_period {
            wave_line.push_str(&format!(" | period {:.1} s", period));
        }
        lines.push(wave_line);

        match (summary.avg_wind_speed, summary.dominant_wind_direction) {
            (Some(speed), Some(direction)) => {
                lines.push(format!("  wind {:.0} km/h from {}", speed, direction));
            }
            _ => {
                if entry.rating.wind_data_missing {
                    lines.push("  wind data unavailable".to_string());
                }
            }
        }

        match entry.window {
            BestWindow::Span { .. } => {
                if let Some((start, end)) = entry.window.labels() {
                    lines.push(format!("  best window: {}-{}", start, end));
                }
            }
            BestWindow::NoIdealWindow => {
                lines.push("  no ideal window".to_string());
            }
        }
    }

    lines.join("\n")
}

/// Renders the full bulletin for a spot as terminal text.
pub fn render_bulletin(spot_name: &str, bulletin: &Bulletin) -> String {
    let mut blocks = vec![format!("Surf forecast for {}", spot_name)];
    for entry in &bulletin.entries {
        blocks.push(render_entry(entry));
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{build, HourlySeries, MarineHourly, RatingConfig, WindHourly};
    use chrono::{NaiveDate, NaiveDateTime};

    fn hour(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, day)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn good_day_series() -> HourlySeries {
        let times = vec![hour(15, 6), hour(15, 9), hour(15, 12), hour(15, 15)];
        let marine = MarineHourly {
            time: times.clone(),
            wave_height: vec![Some(0.3), Some(0.9), Some(1.1), Some(0.4)],
            wave_direction: vec![Some(120.0); 4],
            wind_wave_height: vec![Some(0.2); 4],
            swell_period: vec![Some(5.0), Some(9.0), Some(9.0), Some(6.0)],
        };
        let wind = WindHourly {
            time: times,
            wind_speed: vec![Some(8.0); 4],
            wind_direction: vec![Some(0.0); 4],
        };
        HourlySeries::from_providers(&marine, &wind).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    #[test]
    fn test_render_good_day() {
        let bulletin = build(
            &good_day_series(),
            date(15),
            date(15),
            &RatingConfig::default(),
        )
        .unwrap();
        let text = render_bulletin("Itaúna (Saquarema)", &bulletin);

        assert!(text.contains("Surf forecast for Itaúna (Saquarema)"));
        assert!(text.contains("15/07"));
        assert!(text.contains("★★★"));
        assert!(text.contains("waves 0.7 m (peak 1.1 m at 12:00)"));
        assert!(text.contains("swell from SE"));
        assert!(text.contains("wind 8 km/h from N"));
        assert!(text.contains("best window: 09:00-12:00"));
    }

    #[test]
    fn test_render_day_without_data() {
        let series = HourlySeries::from_providers(
            &MarineHourly {
                time: vec![],
                wave_height: vec![],
                wave_direction: vec![],
                wind_wave_height: vec![],
                swell_period: vec![],
            },
            &WindHourly {
                time: vec![],
                wind_speed: vec![],
                wind_direction: vec![],
            },
        )
        .unwrap();
        let bulletin = build(&series, date(15), date(15), &RatingConfig::default()).unwrap();
        let text = render_bulletin("Itaúna (Saquarema)", &bulletin);

        assert!(text.contains("☆☆☆☆☆"));
        assert!(text.contains("data unavailable"));
        assert!(text.contains("no forecast data for this day"));
    }

    #[test]
    fn test_render_no_ideal_window() {
        let times = vec![hour(15, 9)];
        let marine = MarineHourly {
            time: times.clone(),
            wave_height: vec![Some(0.3)],
            wave_direction: vec![Some(120.0)],
            wind_wave_height: vec![Some(0.1)],
            swell_period: vec![Some(6.0)],
        };
        let wind = WindHourly {
            time: times,
            wind_speed: vec![Some(8.0)],
            wind_direction: vec![Some(0.0)],
        };
        let series = HourlySeries::from_providers(&marine, &wind).unwrap();
        let bulletin = build(&series, date(15), date(15), &RatingConfig::default()).unwrap();
        let text = render_bulletin("Itaúna (Saquarema)", &bulletin);

        assert!(text.contains("no ideal window"));
    }

    #[test]
    fn test_render_missing_wind_is_called_out() {
        let times = vec![hour(15, 9)];
        let marine = MarineHourly {
            time: times.clone(),
            wave_height: vec![Some(1.0)],
            wave_direction: vec![Some(120.0)],
            wind_wave_height: vec![Some(0.2)],
            swell_period: vec![Some(9.0)],
        };
        let wind = WindHourly {
            time: times,
            wind_speed: vec![None],
            wind_direction: vec![None],
        };
        let series = HourlySeries::from_providers(&marine, &wind).unwrap();
        let bulletin = build(&series, date(15), date(15), &RatingConfig::default()).unwrap();
        let text = render_bulletin("Itaúna (Saquarema)", &bulletin);

        assert!(text.contains("wind data unavailable"));
    }

    #[test]
    fn test_stars_row() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }
}
