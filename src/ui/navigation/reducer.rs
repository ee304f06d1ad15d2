use crate::mvi::Reducer;

use super::intent::NavigationIntent;
use super::state::{NavigationState, Screen};

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state.screen, intent) {
            (Screen::Counter, NavigationIntent::OpenSettings) => NavigationState {
                screen: Screen::Settings,
            },
            (Screen::Settings, NavigationIntent::Back) => NavigationState {
                screen: Screen::Counter,
            },
            _ => state,
        }
    }
}
