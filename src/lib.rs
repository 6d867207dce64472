//! ClarityScope - local-first focus and stress analytics.
//!
//! This library turns a day of per-second activity samples (application
//! focus, input counts, pointer movement) into two bounded behavioral
//! scores and the summaries a dashboard or insight generator consumes.
//! All scoring happens on-device from an already-collected log; nothing
//! leaves the machine unless the caller opts into the insight service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ClarityScope                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌─────────┐  │
//! │  │  Import  │──▶│ Windowing │──▶│ Features │──▶│ Scoring │  │
//! │  │  (JSON)  │   │ (10m bins)│   │ (compute)│   │ (0-100) │  │
//! │  └──────────┘   └───────────┘   └──────────┘   └────┬────┘  │
//! │                                                     ▼       │
//! │  ┌──────────┐                              ┌─────────────┐  │
//! │  │ Insight  │◀─────────────────────────────│  Summary /  │  │
//! │  │ Service  │     (six derived figures)    │    Peaks    │  │
//! │  └──────────┘                              └─────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a pure, synchronous computation: identical inputs
//! produce identical output, and recomputation (never incremental
//! update) is the strategy when the log or the productive-app list
//! changes. The insight call is the only asynchronous step and lives
//! strictly in the orchestration layer.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use clarity_scope::core::{compute_scores, summarize, ActivityEvent, ScoringConfig};
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! let log: Vec<ActivityEvent> = (0..10)
//!     .map(|i| ActivityEvent {
//!         timestamp: start + Duration::seconds(i),
//!         app_name: "Code".to_string(),
//!         window_title: "main.rs".to_string(),
//!         mouse_movement: 12.0,
//!         clicks: 1,
//!         keystrokes: 6,
//!         backspace_count: 1,
//!     })
//!     .collect();
//!
//! let apps = vec!["Code".to_string()];
//! let points = compute_scores(&log, &apps, Duration::minutes(10), &ScoringConfig::default());
//! let summary = summarize(&points);
//!
//! assert_eq!(points.len(), 1);
//! assert!(summary.current.focus <= 100.0);
//! ```

pub mod config;
pub mod core;
pub mod import;
pub mod insight;
pub mod sample;

// Re-export key types at crate root for convenience
pub use crate::config::{Config, ConfigError};
pub use crate::core::{
    analyze_daily, compute_scores, default_productive_apps, series_average, summarize,
    ActivityEvent, DailySummary, PeakAnalysis, ScorePair, ScorePoint, ScoringConfig,
};
pub use crate::import::{load_log_file, parse_log_json, ImportError};
pub use crate::insight::{
    BlockingInsightClient, InsightClient, InsightConfig, InsightError, InsightRequest,
    InsightResponse,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
