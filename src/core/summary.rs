//! Series reduction: daily summary and peak analysis.
//!
//! Reduces a score series to the figures the dashboard and the insight
//! service consume. All reductions are generic over the span of points
//! they receive; feeding them a day or a week is the caller's choice.

use crate::core::types::{DailySummary, ScorePair, ScorePoint};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Headline used when there are no scored windows to summarize.
pub const EMPTY_SUMMARY_HEADLINE: &str = "Not enough data for a summary.";

/// Sentinel peak time for an empty series.
pub const PEAK_TIME_UNAVAILABLE: &str = "N/A";

/// Peak-time figures handed to the insight generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakAnalysis {
    /// Local wall-clock time of the focus maximum
    pub peak_focus_time: String,
    /// Local wall-clock time of the stress maximum
    pub peak_stress_time: String,
    pub daily_focus_average: f64,
    pub daily_stress_average: f64,
}

/// Arithmetic mean of a score series. Empty series average to zero.
pub fn series_average(points: &[ScorePoint]) -> ScorePair {
    if points.is_empty() {
        return ScorePair::ZERO;
    }
    let n = points.len() as f64;
    ScorePair {
        focus: points.iter().map(|p| p.focus_score).sum::<f64>() / n,
        stress: points.iter().map(|p| p.stress_score).sum::<f64>() / n,
    }
}

/// Reduce a score series to its display summary.
///
/// `current` is the last point, `weekly_average` the mean over whatever
/// span was supplied; both are rounded to whole scores. An empty series
/// yields zeros and the [`EMPTY_SUMMARY_HEADLINE`] sentinel.
pub fn summarize(points: &[ScorePoint]) -> DailySummary {
    let average = series_average(points);
    let current = points
        .last()
        .map(|p| ScorePair {
            focus: p.focus_score,
            stress: p.stress_score,
        })
        .unwrap_or(ScorePair::ZERO);

    let headline = if points.is_empty() {
        EMPTY_SUMMARY_HEADLINE.to_string()
    } else {
        format!(
            "Focus at {:.0}%, Stress at {:.0}% today.",
            average.focus.round(),
            average.stress.round()
        )
    };

    DailySummary {
        current: ScorePair {
            focus: current.focus.round(),
            stress: current.stress.round(),
        },
        weekly_average: ScorePair {
            focus: average.focus.round(),
            stress: average.stress.round(),
        },
        headline,
    }
}

/// Scan a series for its focus and stress peaks.
///
/// Comparison is strictly greater-than, so ties keep the earliest
/// maximum. Averages are unrounded. An empty series reports
/// [`PEAK_TIME_UNAVAILABLE`] times and zero averages.
pub fn analyze_daily(points: &[ScorePoint]) -> PeakAnalysis {
    if points.is_empty() {
        return PeakAnalysis {
            peak_focus_time: PEAK_TIME_UNAVAILABLE.to_string(),
            peak_stress_time: PEAK_TIME_UNAVAILABLE.to_string(),
            daily_focus_average: 0.0,
            daily_stress_average: 0.0,
        };
    }

    let mut peak_focus: (f64, DateTime<Utc>) = (-1.0, points[0].timestamp);
    let mut peak_stress: (f64, DateTime<Utc>) = (-1.0, points[0].timestamp);
    let mut total_focus = 0.0;
    let mut total_stress = 0.0;

    for point in points {
        if point.focus_score > peak_focus.0 {
            peak_focus = (point.focus_score, point.timestamp);
        }
        if point.stress_score > peak_stress.0 {
            peak_stress = (point.stress_score, point.timestamp);
        }
        total_focus += point.focus_score;
        total_stress += point.stress_score;
    }

    let n = points.len() as f64;
    PeakAnalysis {
        peak_focus_time: format_clock_time(peak_focus.1),
        peak_stress_time: format_clock_time(peak_stress.1),
        daily_focus_average: total_focus / n,
        daily_stress_average: total_stress / n,
    }
}

/// Format a timestamp as local wall-clock time, e.g. `09:30 AM`.
pub fn format_clock_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn point(offset_minutes: i64, focus: f64, stress: f64) -> ScorePoint {
        ScorePoint {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
                + Duration::minutes(offset_minutes),
            focus_score: focus,
            stress_score: stress,
        }
    }

    #[test]
    fn test_empty_series_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.current, ScorePair::ZERO);
        assert_eq!(summary.weekly_average, ScorePair::ZERO);
        assert_eq!(summary.headline, EMPTY_SUMMARY_HEADLINE);
    }

    #[test]
    fn test_summary_rounds_and_formats_headline() {
        let points = vec![point(0, 50.0, 10.2), point(10, 51.0, 10.2)];
        let summary = summarize(&points);

        assert_eq!(summary.current.focus, 51.0);
        assert_eq!(summary.weekly_average.focus, 51.0); // 50.5 rounds up
        assert_eq!(summary.weekly_average.stress, 10.0);
        assert_eq!(summary.headline, "Focus at 51%, Stress at 10% today.");
    }

    #[test]
    fn test_series_average_is_unrounded() {
        let points = vec![point(0, 50.0, 0.0), point(10, 51.0, 0.0)];
        let average = series_average(&points);
        assert_eq!(average.focus, 50.5);
    }

    #[test]
    fn test_empty_series_peaks() {
        let analysis = analyze_daily(&[]);
        assert_eq!(analysis.peak_focus_time, PEAK_TIME_UNAVAILABLE);
        assert_eq!(analysis.peak_stress_time, PEAK_TIME_UNAVAILABLE);
        assert_eq!(analysis.daily_focus_average, 0.0);
        assert_eq!(analysis.daily_stress_average, 0.0);
    }

    #[test]
    fn test_peak_tie_keeps_earliest_window() {
        let points = vec![
            point(0, 80.0, 5.0),
            point(10, 80.0, 5.0),
            point(20, 40.0, 5.0),
        ];
        let analysis = analyze_daily(&points);

        assert_eq!(
            analysis.peak_focus_time,
            format_clock_time(points[0].timestamp)
        );
        assert_eq!(
            analysis.peak_stress_time,
            format_clock_time(points[0].timestamp)
        );
    }

    #[test]
    fn test_peak_averages() {
        let points = vec![point(0, 60.0, 30.0), point(10, 80.0, 10.0)];
        let analysis = analyze_daily(&points);

        assert_eq!(analysis.daily_focus_average, 70.0);
        assert_eq!(analysis.daily_stress_average, 20.0);
        assert_eq!(
            analysis.peak_focus_time,
            format_clock_time(points[1].timestamp)
        );
        assert_eq!(
            analysis.peak_stress_time,
            format_clock_time(points[0].timestamp)
        );
    }

    #[test]
    fn test_peak_analysis_wire_format() {
        let json = serde_json::to_value(analyze_daily(&[])).unwrap();
        assert_eq!(json["peakFocusTime"], "N/A");
        assert_eq!(json["peakStressTime"], "N/A");
        assert_eq!(json["dailyFocusAverage"], 0.0);
        assert_eq!(json["dailyStressAverage"], 0.0);
    }
}
