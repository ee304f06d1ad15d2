//! Counter core: state, intents, reducer, store and the auto-increment timer.
//!
//! - `state.rs` - `CounterState` snapshot
//! - `intent.rs` - the five user intents
//! - `reducer.rs` - pure state transitions
//! - `scheduler.rs` - zero-or-one periodic timer
//! - `store.rs` - serialized mutation path, observers, timer reconciliation

mod intent;
mod reducer;
mod scheduler;
mod state;
mod store;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use scheduler::{AutoIncrementScheduler, TimerId, TimerState};
pub use state::{CounterState, DEFAULT_INTERVAL_MS};
pub use store::{CounterStore, Subscription, WeakCounterStore};
