//! Synthetic activity logs for demos and manual testing.
//!
//! Generates one-second samples with realistic magnitudes: full activity
//! during local working hours (09:00-17:00), sparse low-intensity
//! activity outside them.

use crate::core::types::ActivityEvent;
use chrono::{DateTime, Duration, Local, Timelike, Utc};
use rand::Rng;

const APPS: [&str; 10] = [
    "Code",
    "Google Chrome",
    "Slack",
    "Figma",
    "Spotify",
    "Terminal",
    "iTerm2",
    "WebStorm",
    "Notion",
    "Obsidian",
];

const TITLES: [&str; 8] = [
    "src/main.rs - clarity-scope",
    "ClarityScope - Digital Health Monitor",
    "general - Slack",
    "Design System - Figma",
    "Lo-fi Beats",
    "cargo run",
    "New Project",
    "User Research Notes",
];

fn sample_event<R: Rng>(rng: &mut R, timestamp: DateTime<Utc>) -> ActivityEvent {
    ActivityEvent {
        timestamp,
        app_name: APPS[rng.gen_range(0..APPS.len())].to_string(),
        window_title: TITLES[rng.gen_range(0..TITLES.len())].to_string(),
        mouse_movement: rng.gen_range(0..500) as f64,
        clicks: rng.gen_range(0..20),
        keystrokes: rng.gen_range(0..100),
        backspace_count: rng.gen_range(0..5),
    }
}

/// Generate a day's worth of per-second activity samples.
///
/// Seconds falling in local working hours always produce an event;
/// off-hours seconds produce one 10% of the time, with damped input
/// magnitudes.
pub fn generate_daily_log(start: DateTime<Utc>, hours: u32) -> Vec<ActivityEvent> {
    let mut rng = rand::thread_rng();
    let total_seconds = i64::from(hours) * 3600;
    let mut logs = Vec::new();

    for i in 0..total_seconds {
        let timestamp = start + Duration::seconds(i);
        let hour = timestamp.with_timezone(&Local).hour();

        if (9..17).contains(&hour) {
            logs.push(sample_event(&mut rng, timestamp));
        } else if rng.gen_bool(0.1) {
            logs.push(ActivityEvent {
                mouse_movement: rng.gen_range(0..50) as f64,
                clicks: rng.gen_range(0..2),
                keystrokes: rng.gen_range(0..10),
                ..sample_event(&mut rng, timestamp)
            });
        }
    }

    logs
}
