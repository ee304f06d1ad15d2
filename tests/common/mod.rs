//! Shared test helpers.

#![allow(dead_code)]

use counterplusplus::counter::{CounterState, CounterStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::sync::Arc;

/// Plain key press with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Attach an observer that records every state it is handed.
pub fn record_states(
    store: &CounterStore,
) -> (Arc<Mutex<Vec<CounterState>>>, counterplusplus::counter::Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move |state| sink.lock().push(*state));
    (seen, subscription)
}

/// `auto_enabled` must always agree with the scheduler.
pub fn assert_invariant(store: &CounterStore) {
    assert_eq!(
        store.state().auto_enabled,
        store.timer_state().is_running(),
        "auto_enabled and timer liveness diverged"
    );
}
