//! Focus and stress scoring formulas.
//!
//! Maps per-window features to two bounded scores and drives the full
//! log-to-series pipeline. Both scores land in [0, 100]; the component
//! terms are combined first and only the composite is clamped.

use crate::core::features::{compute_features, WindowFeatures};
use crate::core::types::{ActivityEvent, ScorePoint};
use crate::core::windowing::partition;
use chrono::Duration;

/// Normalization constants for the scoring formulas.
///
/// The defaults are calibrated scale factors, not measured quantities;
/// derived outputs are only comparable across runs that share them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Plausible ceiling on context switches per hour
    pub max_switches_per_hour: f64,
    /// Keystroke standard deviation treated as maximal variability
    pub keystroke_variance_scale: f64,
    /// Pointer speed (px/s) treated as maximal agitation
    pub pointer_speed_scale: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_switches_per_hour: 60.0,
            keystroke_variance_scale: 50.0,
            pointer_speed_scale: 1000.0,
        }
    }
}

/// Score a single window's features.
///
/// Focus combines the context-switch rate (weight 0.6) with the
/// productive-time share (weight 0.4). The switch term goes negative
/// beyond `max_switches_per_hour` rather than flooring at zero; an
/// extreme switch rate is meant to pull the composite down sharply.
///
/// Stress combines keystroke variability (0.5), backspace ratio (0.3),
/// and pointer speed (0.2). The backspace ratio is not capped at 1, so
/// corrections outnumbering keystrokes inflate the sum until the final
/// clamp.
pub fn score_window(features: &WindowFeatures, config: &ScoringConfig) -> ScorePoint {
    let switch_term = 1.0 - features.app_switches_per_hour / config.max_switches_per_hour;
    let focus_score = (switch_term * 0.6 + features.productive_ratio * 0.4) * 100.0;

    let keystroke_factor =
        (features.keystroke_variance / config.keystroke_variance_scale).min(1.0);
    let pointer_factor = (features.mean_pointer_speed / config.pointer_speed_scale).min(1.0);
    let stress_score = ((keystroke_factor * 0.5
        + features.backspace_ratio * 0.3
        + pointer_factor * 0.2)
        * 100.0)
        .min(100.0);

    ScorePoint {
        timestamp: features.window_start,
        focus_score: focus_score.clamp(0.0, 100.0),
        stress_score: stress_score.clamp(0.0, 100.0),
    }
}

/// Compute the full score series for a log.
///
/// Partitions the log into fixed windows, extracts features, and scores
/// each non-empty window. The result is ordered by window start, one
/// point per non-empty window. Pure: identical inputs yield identical
/// output.
pub fn compute_scores(
    events: &[ActivityEvent],
    productive_apps: &[String],
    window: Duration,
    config: &ScoringConfig,
) -> Vec<ScorePoint> {
    partition(events, window)
        .iter()
        .map(|w| score_window(&compute_features(w, productive_apps), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn features() -> WindowFeatures {
        WindowFeatures {
            window_start: t0(),
            app_switches_per_hour: 0.0,
            productive_ratio: 0.0,
            keystroke_variance: 0.0,
            backspace_ratio: 0.0,
            mean_pointer_speed: 0.0,
        }
    }

    #[test]
    fn test_quiet_productive_window_scores_full_focus() {
        let f = WindowFeatures {
            productive_ratio: 1.0,
            ..features()
        };
        let point = score_window(&f, &ScoringConfig::default());

        assert!((point.focus_score - 100.0).abs() < 1e-9);
        assert_eq!(point.stress_score, 0.0);
        assert_eq!(point.timestamp, t0());
    }

    #[test]
    fn test_switch_term_is_not_floored_before_combination() {
        // 72 switches/hour exceeds the ceiling: the switch term goes to
        // -0.2 and drags the composite to 28, not the 40 a mid-formula
        // floor would produce.
        let f = WindowFeatures {
            app_switches_per_hour: 72.0,
            productive_ratio: 1.0,
            ..features()
        };
        let point = score_window(&f, &ScoringConfig::default());
        assert!((point.focus_score - 28.0).abs() < 1e-6);
    }

    #[test]
    fn test_focus_clamps_to_zero() {
        let f = WindowFeatures {
            app_switches_per_hour: 600.0,
            ..features()
        };
        let point = score_window(&f, &ScoringConfig::default());
        assert_eq!(point.focus_score, 0.0);
    }

    #[test]
    fn test_stress_caps_at_one_hundred() {
        let f = WindowFeatures {
            backspace_ratio: 4.0,
            ..features()
        };
        let point = score_window(&f, &ScoringConfig::default());
        assert_eq!(point.stress_score, 100.0);
    }

    #[test]
    fn test_stress_factors_saturate_individually() {
        let f = WindowFeatures {
            keystroke_variance: 500.0,
            mean_pointer_speed: 10_000.0,
            ..features()
        };
        let point = score_window(&f, &ScoringConfig::default());

        // Both factors cap at 1.0: 0.5 + 0.2 weights remain.
        assert!((point.stress_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_scales_shift_stress() {
        let f = WindowFeatures {
            keystroke_variance: 25.0,
            ..features()
        };
        let default_point = score_window(&f, &ScoringConfig::default());
        let strict = ScoringConfig {
            keystroke_variance_scale: 25.0,
            ..ScoringConfig::default()
        };
        let strict_point = score_window(&f, &strict);

        assert!((default_point.stress_score - 25.0).abs() < 1e-9);
        assert!((strict_point.stress_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_constants() {
        let config = ScoringConfig::default();
        assert_eq!(config.max_switches_per_hour, 60.0);
        assert_eq!(config.keystroke_variance_scale, 50.0);
        assert_eq!(config.pointer_speed_scale, 1000.0);
    }
}
