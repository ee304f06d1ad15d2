//! Counter state snapshot.

use crate::mvi::UiState;

/// Interval a fresh store starts with.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Everything the screens need to render the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    /// Current value. Unbounded in both directions.
    pub count: i64,
    /// Whether auto-increment is on. Mirrors the scheduler having a live timer.
    pub auto_enabled: bool,
    /// Auto-increment period in milliseconds.
    pub interval_ms: u64,
    /// Bumped by the store on every mutation. Snapshots delivered from
    /// different threads can arrive out of order; the higher revision is
    /// the newer one.
    pub revision: u64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            auto_enabled: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            revision: 0,
        }
    }
}

impl UiState for CounterState {}

impl CounterState {
    pub fn with_interval(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            ..Self::default()
        }
    }

    /// True when `self` was committed after `other`.
    pub fn is_newer_than(&self, other: &CounterState) -> bool {
        self.revision > other.revision
    }

    /// Interval rounded down to whole seconds, as shown on the settings screen.
    pub fn interval_secs(&self) -> u64 {
        self.interval_ms / 1000
    }
}
