//! Reducer for the counter state.

use crate::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Pure counter transitions.
///
/// Timer effects live in [`super::CounterStore`], which calls this reducer
/// and then reconciles the scheduler when [`CounterIntent::needs_reconcile`]
/// says so.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.wrapping_add(1),
                ..state
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
                ..state
            },
            CounterIntent::Reset => CounterState { count: 0, ..state },
            CounterIntent::ToggleAutoIncrement => CounterState {
                auto_enabled: !state.auto_enabled,
                ..state
            },
            CounterIntent::SetInterval { interval_ms } => CounterState {
                interval_ms,
                ..state
            },
        }
    }
}
