//! Intents accepted by the counter store.

use crate::mvi::Intent;

use super::state::CounterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    Reset,
    ToggleAutoIncrement,
    /// New auto-increment period in milliseconds.
    SetInterval { interval_ms: u64 },
}

impl Intent for CounterIntent {}

impl CounterIntent {
    /// True when applying this intent to `next` (the post-reduce state) must
    /// bring the scheduler back in line with the state.
    pub fn needs_reconcile(&self, next: &CounterState) -> bool {
        match self {
            CounterIntent::ToggleAutoIncrement => true,
            CounterIntent::SetInterval { .. } => next.auto_enabled,
            CounterIntent::Increment | CounterIntent::Decrement | CounterIntent::Reset => false,
        }
    }
}
