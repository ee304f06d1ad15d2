use crate::counter::{CounterIntent, CounterState, CounterStore};
use crate::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState, Screen};
use crate::ui::slider::IntervalSlider;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Which screen is showing (MVI pattern).
    navigation: NavigationState,
    /// Shared counter store. Both screens dispatch into it.
    store: CounterStore,
    /// Latest snapshot to render. Refreshed after our own intents and on
    /// every state event forwarded from the store's observer.
    counter: CounterState,
}

impl App {
    pub fn new(store: CounterStore) -> Self {
        let counter = store.state();
        Self {
            should_quit: false,
            navigation: NavigationState::default(),
            store,
            counter,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.navigation.screen
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    /// Settings slider position for the current interval.
    pub fn slider(&self) -> IntervalSlider {
        IntervalSlider::from_ms(self.counter.interval_ms)
    }

    /// State pushed by the store (timer ticks included). Snapshots older
    /// than the one already shown are dropped.
    pub fn on_state(&mut self, state: CounterState) {
        if state.is_newer_than(&self.counter) {
            self.counter = state;
        }
    }

    // ========================================================================
    // Navigation (MVI pattern)
    // ========================================================================

    fn dispatch_navigation(&mut self, intent: NavigationIntent) {
        dispatch_mvi!(self, navigation, NavigationReducer, intent);
    }

    pub fn open_settings(&mut self) {
        self.dispatch_navigation(NavigationIntent::OpenSettings);
    }

    pub fn go_back(&mut self) {
        self.dispatch_navigation(NavigationIntent::Back);
    }

    // ========================================================================
    // Counter intents
    // ========================================================================

    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        self.store.dispatch(intent);
        self.counter = self.store.state();
    }

    /// Move the slider with `step`. The store only hears about it when the
    /// position actually changes, so pressing against a bound leaves a
    /// running timer alone.
    pub fn move_slider(&mut self, step: impl FnOnce(IntervalSlider) -> IntervalSlider) {
        let current = self.slider();
        let next = step(current);
        if next != current || next.ms() != self.counter.interval_ms {
            self.dispatch_counter(CounterIntent::SetInterval {
                interval_ms: next.ms(),
            });
        }
    }
}
