//! Core scoring engine.
//!
//! This module contains:
//! - Window partitioning over a recorded event log
//! - Per-window behavioral feature extraction
//! - Focus/stress scoring and series reduction

pub mod features;
pub mod scoring;
pub mod summary;
pub mod types;
pub mod windowing;

// Re-export commonly used types
pub use features::{compute_features, WindowFeatures};
pub use scoring::{compute_scores, score_window, ScoringConfig};
pub use summary::{
    analyze_daily, format_clock_time, series_average, summarize, PeakAnalysis,
    EMPTY_SUMMARY_HEADLINE, PEAK_TIME_UNAVAILABLE,
};
pub use types::{default_productive_apps, ActivityEvent, DailySummary, ScorePair, ScorePoint};
pub use windowing::{partition, EventWindow, DEFAULT_WINDOW_MINUTES};
