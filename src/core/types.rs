//! Data model for the scoring engine.
//!
//! Events arrive with camelCase field names, matching the JSON export
//! format produced by the activity logger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single per-second activity sample from the local activity logger.
///
/// `window_title` is carried for display only and never participates in
/// scoring. `backspace_count` is expected to stay at or below `keystrokes`
/// but this is not enforced; see the backspace-ratio handling in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    /// When the sample was taken (second resolution)
    pub timestamp: DateTime<Utc>,
    /// Name of the frontmost application
    pub app_name: String,
    /// Title of the frontmost window (sanitized upstream)
    pub window_title: String,
    /// Pointer travel during this second, in pixels
    pub mouse_movement: f64,
    /// Mouse clicks during this second
    pub clicks: u32,
    /// Keystrokes during this second
    pub keystrokes: u32,
    /// Backspace presses during this second
    pub backspace_count: u32,
}

/// One scored window of activity.
///
/// The timestamp is the window start. Points are emitted in ascending
/// timestamp order, one per non-empty window; both scores are clamped
/// to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    pub timestamp: DateTime<Utc>,
    pub focus_score: f64,
    pub stress_score: f64,
}

/// A focus/stress value pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub focus: f64,
    pub stress: f64,
}

impl ScorePair {
    pub const ZERO: ScorePair = ScorePair {
        focus: 0.0,
        stress: 0.0,
    };
}

/// Reduced view of a score series: the latest window, the average over
/// the supplied span, and a one-line headline.
///
/// "Weekly" is a naming convention only; the average covers whatever
/// series the caller passes in, typically a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub current: ScorePair,
    pub weekly_average: ScorePair,
    pub headline: String,
}

/// The default productive application list.
pub fn default_productive_apps() -> Vec<String> {
    [
        "Code", "WebStorm", "Figma", "Terminal", "iTerm2", "Obsidian", "Notion",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_wire_format() {
        let event = ActivityEvent {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            app_name: "Code".to_string(),
            window_title: "main.rs".to_string(),
            mouse_movement: 42.0,
            clicks: 1,
            keystrokes: 8,
            backspace_count: 2,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["appName"], "Code");
        assert_eq!(json["windowTitle"], "main.rs");
        assert_eq!(json["mouseMovement"], 42.0);
        assert_eq!(json["backspaceCount"], 2);
    }

    #[test]
    fn test_score_point_wire_format() {
        let point = ScorePoint {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            focus_score: 80.0,
            stress_score: 20.0,
        };

        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["focusScore"], 80.0);
        assert_eq!(json["stressScore"], 20.0);
    }

    #[test]
    fn test_default_productive_apps() {
        let apps = default_productive_apps();
        assert_eq!(apps.len(), 7);
        assert!(apps.iter().any(|a| a == "Code"));
        assert!(apps.iter().any(|a| a == "Notion"));
    }
}
