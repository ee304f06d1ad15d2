//! Single source of truth for the counter.
//!
//! Every mutation (key press or timer tick) goes through one
//! `parking_lot::Mutex`. The scheduler is reconciled while that lock is
//! held, so a burst of toggle / set-interval / toggle calls can never leave
//! two timers running. Observers are called after the lock is released and
//! may call back into the store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::mvi::Reducer;

use super::intent::CounterIntent;
use super::reducer::CounterReducer;
use super::scheduler::{AutoIncrementScheduler, TimerId, TimerState};
use super::state::CounterState;

type Observer = Arc<dyn Fn(&CounterState) + Send + Sync + 'static>;

/// Cheaply clonable handle to one counter.
///
/// Clones share the same state. When the last clone is dropped the running
/// timer, if any, is cancelled.
#[derive(Clone)]
pub struct CounterStore {
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<StoreInner>,
    observers: Mutex<Vec<(u64, Observer)>>,
    next_observer_id: AtomicU64,
}

struct StoreInner {
    state: CounterState,
    scheduler: AutoIncrementScheduler,
}

impl CounterStore {
    /// Fresh store with the default one-second interval. Timers run on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self::from_state(runtime, CounterState::default())
    }

    /// Fresh store with a custom initial interval. Auto-increment starts off.
    pub fn with_interval(runtime: Handle, interval_ms: u64) -> Self {
        Self::from_state(runtime, CounterState::with_interval(interval_ms))
    }

    fn from_state(runtime: Handle, state: CounterState) -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(StoreInner {
                    state,
                    scheduler: AutoIncrementScheduler::new(runtime),
                }),
                observers: Mutex::new(Vec::new()),
                next_observer_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> CounterState {
        self.shared.inner.lock().state
    }

    /// What the scheduler is doing right now.
    pub fn timer_state(&self) -> TimerState {
        self.shared.inner.lock().scheduler.state()
    }

    pub fn increment(&self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&self) {
        self.dispatch(CounterIntent::Reset);
    }

    pub fn toggle_auto_increment(&self) {
        self.dispatch(CounterIntent::ToggleAutoIncrement);
    }

    /// Change the auto-increment period. A running timer restarts at the new
    /// period; time already waited under the old one is discarded.
    pub fn set_auto_increment_interval(&self, interval_ms: u64) {
        self.dispatch(CounterIntent::SetInterval { interval_ms });
    }

    /// Apply `intent`, reconcile the timer if needed, then notify observers.
    pub fn dispatch(&self, intent: CounterIntent) {
        if let CounterIntent::SetInterval { interval_ms: 0 } = intent {
            tracing::warn!("Ignoring zero auto-increment interval");
            return;
        }

        let snapshot = {
            let mut inner = self.shared.inner.lock();
            let reduced = CounterReducer::reduce(inner.state, intent);
            let next = inner.commit(reduced);
            if intent.needs_reconcile(&next) {
                let store = Arc::downgrade(&self.shared);
                inner.scheduler.reconcile(
                    next.auto_enabled,
                    Duration::from_millis(next.interval_ms),
                    move |id| tick(&store, id),
                );
            }
            next
        };

        tracing::debug!(?intent, count = snapshot.count, "Counter intent applied");
        self.shared.notify(&snapshot);
    }

    /// Register `observer` for every future state change.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`] is called.
    ///
    /// Observers may run on the timer thread and on callers' threads at the
    /// same time, so snapshots can arrive out of order. Use
    /// [`CounterState::is_newer_than`] to discard stale ones.
    ///
    /// The store holds `observer` for as long as it is registered. An
    /// observer that needs the store must capture a [`WeakCounterStore`];
    /// a strong clone forms a cycle and the store is never freed.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&CounterState) + Send + Sync + 'static,
    {
        let id = self.shared.next_observer_id.fetch_add(1, Ordering::Relaxed);
        self.shared.observers.lock().push((id, Arc::new(observer)));
        Subscription {
            store: Arc::downgrade(&self.shared),
            id,
        }
    }

    /// Tear down: cancel the timer and switch auto-increment off.
    pub fn shutdown(&self) {
        let snapshot = {
            let mut inner = self.shared.inner.lock();
            inner.scheduler.cancel();
            if !inner.state.auto_enabled {
                return;
            }
            let next = CounterState {
                auto_enabled: false,
                ..inner.state
            };
            inner.commit(next)
        };
        self.shared.notify(&snapshot);
    }

    /// Handle that does not keep the store alive.
    pub fn downgrade(&self) -> WeakCounterStore {
        WeakCounterStore {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

/// Non-owning counterpart of [`CounterStore`].
#[derive(Clone)]
pub struct WeakCounterStore {
    shared: Weak<Shared>,
}

impl WeakCounterStore {
    /// `None` once every [`CounterStore`] clone has been dropped.
    pub fn upgrade(&self) -> Option<CounterStore> {
        self.shared.upgrade().map(|shared| CounterStore { shared })
    }
}

impl StoreInner {
    /// Store `next` as the current state under a fresh revision.
    fn commit(&mut self, next: CounterState) -> CounterState {
        self.state = CounterState {
            revision: self.state.revision + 1,
            ..next
        };
        self.state
    }
}

impl Shared {
    fn notify(&self, state: &CounterState) {
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(state);
        }
    }
}

/// Timer callback. Holds only a weak reference so a running timer never
/// keeps the store alive.
fn tick(store: &Weak<Shared>, id: TimerId) {
    let Some(shared) = store.upgrade() else {
        return;
    };

    let snapshot = {
        let mut inner = shared.inner.lock();
        if !inner.scheduler.is_current(id) {
            tracing::trace!(%id, "Dropping tick from superseded timer");
            return;
        }
        let next = CounterReducer::reduce(inner.state, CounterIntent::Increment);
        inner.commit(next)
    };

    tracing::trace!(%id, count = snapshot.count, "Auto-increment tick");
    shared.notify(&snapshot);
}

/// Registration handle returned by [`CounterStore::subscribe`].
pub struct Subscription {
    store: Weak<Shared>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.store.upgrade() {
            shared.observers.lock().retain(|(id, _)| *id != self.id);
        }
    }
}
