//! Fixed-size window partitioning over a recorded event log.
//!
//! A complete, time-ordered log is sliced into contiguous windows of a
//! fixed duration (default 10 minutes), anchored at the first event's
//! timestamp. Empty slots produce no window; gaps in the series are
//! silent rather than zero-filled.

use crate::core::types::ActivityEvent;
use chrono::{DateTime, Duration, Utc};

/// Default window length in minutes.
pub const DEFAULT_WINDOW_MINUTES: i64 = 10;

/// A non-empty time window borrowing a contiguous run of log events.
#[derive(Debug, Clone)]
pub struct EventWindow<'a> {
    /// Start time of the window (inclusive)
    pub start: DateTime<Utc>,
    /// End time of the window (exclusive)
    pub end: DateTime<Utc>,
    /// Events with timestamps in `[start, end)`
    pub events: &'a [ActivityEvent],
}

impl EventWindow<'_> {
    /// Check if a timestamp falls within this window.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Number of events in this window.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Window length in minutes.
    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 60_000.0
    }
}

/// Partition a time-ordered log into fixed-length windows.
///
/// The first window starts at the first event's timestamp; subsequent
/// windows advance in steps of `window` until the last event is covered.
/// Windows with no events are skipped. An empty log yields no windows.
/// `window` must be positive.
///
/// Precondition: `events` is sorted ascending by timestamp. The engine
/// never re-sorts; ordering is the caller's responsibility.
pub fn partition(events: &[ActivityEvent], window: Duration) -> Vec<EventWindow<'_>> {
    let mut windows = Vec::new();
    let Some(first) = events.first() else {
        return windows;
    };
    let last = events[events.len() - 1].timestamp;

    let mut start = first.timestamp;
    let mut idx = 0;
    while start <= last {
        let end = start + window;
        let begin = idx;
        while idx < events.len() && events[idx].timestamp < end {
            idx += 1;
        }
        if idx > begin {
            windows.push(EventWindow {
                start,
                end,
                events: &events[begin..idx],
            });
        }
        start = end;
    }

    windows
}
