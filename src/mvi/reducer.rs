//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Apply `intent` to `state` and return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
