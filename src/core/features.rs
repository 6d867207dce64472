//! Per-window behavioral feature extraction.
//!
//! Each non-empty window is reduced to a small set of raw features that
//! feed the focus and stress formulas: context-switch rate, productive
//! time share, keystroke-rate variability, correction rate, and pointer
//! speed.

use crate::core::windowing::EventWindow;
use chrono::{DateTime, Timelike, Utc};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Raw behavioral features for one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFeatures {
    /// Start of the window these features describe
    pub window_start: DateTime<Utc>,
    /// Application switches extrapolated to an hourly rate
    pub app_switches_per_hour: f64,
    /// Share of events spent in productive applications (0-1)
    pub productive_ratio: f64,
    /// Population standard deviation of per-minute keystroke sums
    pub keystroke_variance: f64,
    /// Backspaces per keystroke; exceeds 1 when corrections outnumber keys
    pub backspace_ratio: f64,
    /// Pointer travel per event, in pixels per second
    pub mean_pointer_speed: f64,
}

/// Compute the behavioral features for a window.
///
/// `productive_apps` is the caller-owned allowlist of application names;
/// it only affects `productive_ratio`.
pub fn compute_features(window: &EventWindow<'_>, productive_apps: &[String]) -> WindowFeatures {
    let events = window.events;
    let total = events.len();

    let app_switches = events
        .windows(2)
        .filter(|pair| pair[0].app_name != pair[1].app_name)
        .count();
    let minutes = window.duration_minutes();
    let app_switches_per_hour = if minutes > 0.0 {
        app_switches as f64 * (60.0 / minutes)
    } else {
        0.0
    };

    let productive = events
        .iter()
        .filter(|e| productive_apps.iter().any(|app| app == &e.app_name))
        .count();
    let productive_ratio = if total > 0 {
        productive as f64 / total as f64
    } else {
        0.0
    };

    // Keystrokes are summed per calendar minute-of-hour; only minutes
    // that actually occur in the window contribute a bucket.
    let mut per_minute: BTreeMap<u32, f64> = BTreeMap::new();
    let mut total_keystrokes: u64 = 0;
    let mut total_backspaces: u64 = 0;
    let mut total_movement: f64 = 0.0;
    for event in events {
        *per_minute.entry(event.timestamp.minute()).or_insert(0.0) += f64::from(event.keystrokes);
        total_keystrokes += u64::from(event.keystrokes);
        total_backspaces += u64::from(event.backspace_count);
        total_movement += event.mouse_movement;
    }

    let minute_sums: Vec<f64> = per_minute.into_values().collect();
    let keystroke_variance = if minute_sums.is_empty() {
        0.0
    } else {
        minute_sums.population_std_dev()
    };

    let backspace_ratio = if total_keystrokes > 0 {
        total_backspaces as f64 / total_keystrokes as f64
    } else {
        0.0
    };

    // Events are one per second, so per-event travel doubles as px/s.
    let mean_pointer_speed = if total > 0 {
        total_movement / total as f64
    } else {
        0.0
    };

    WindowFeatures {
        window_start: window.start,
        app_switches_per_hour,
        productive_ratio,
        keystroke_variance,
        backspace_ratio,
        mean_pointer_speed,
    }
}
