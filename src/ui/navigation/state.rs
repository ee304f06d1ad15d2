use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Counter,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub screen: Screen,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn is_settings(&self) -> bool {
        self.screen == Screen::Settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_counter() {
        assert_eq!(NavigationState::default().screen, Screen::Counter);
        assert!(!NavigationState::default().is_settings());
    }
}
