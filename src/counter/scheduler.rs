//! Periodic auto-increment timer.
//!
//! The scheduler owns zero or one tokio task. Every reconfiguration goes
//! through [`AutoIncrementScheduler::reconcile`], which cancels whatever is
//! running before deciding whether to start a replacement.
//!
//! Aborting a tokio task is not instantaneous when the task is in the middle
//! of a poll on another worker. Each timer therefore carries a [`TimerId`]
//! and hands it to the tick callback; the owner checks
//! [`AutoIncrementScheduler::is_current`] under its own lock and drops ticks
//! from superseded timers.

use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep, sleep_until, Instant};

/// Generation tag of a started timer. Never reused within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Observable scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { id: TimerId, interval: Duration },
}

impl TimerState {
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }
}

struct LiveTimer {
    id: TimerId,
    interval: Duration,
    task: JoinHandle<()>,
}

pub struct AutoIncrementScheduler {
    runtime: Handle,
    timer: Option<LiveTimer>,
    last_id: u64,
}

impl AutoIncrementScheduler {
    /// Create an idle scheduler that spawns its timers on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            timer: None,
            last_id: 0,
        }
    }

    /// Bring the scheduler in line with `enabled` / `interval`.
    ///
    /// Always cancels the current timer first. When `enabled`, starts a new
    /// one whose first tick fires `interval` after this call; later ticks fire
    /// `interval` after the previous tick returned. `interval` must be
    /// non-zero.
    pub fn reconcile<F>(&mut self, enabled: bool, interval: Duration, on_tick: F)
    where
        F: Fn(TimerId) + Send + Sync + 'static,
    {
        self.cancel();
        if !enabled {
            return;
        }

        self.last_id += 1;
        let id = TimerId(self.last_id);
        let first_tick = Instant::now() + interval;
        let task = self.runtime.spawn(async move {
            sleep_until(first_tick).await;
            loop {
                on_tick(id);
                sleep(interval).await;
            }
        });

        tracing::debug!(%id, interval_ms = interval.as_millis() as u64, "Auto-increment timer started");
        self.timer = Some(LiveTimer { id, interval, task });
    }

    /// Stop the running timer, if any. Safe to call when idle.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.task.abort();
            tracing::debug!(id = %timer.id, "Auto-increment timer cancelled");
        }
    }

    pub fn state(&self) -> TimerState {
        match &self.timer {
            Some(timer) => TimerState::Running {
                id: timer.id,
                interval: timer.interval,
            },
            None => TimerState::Idle,
        }
    }

    /// True if `id` belongs to the timer that is live right now.
    pub fn is_current(&self, id: TimerId) -> bool {
        self.timer.as_ref().is_some_and(|timer| timer.id == id)
    }
}

impl Drop for AutoIncrementScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
