use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Settings button on the counter screen.
    OpenSettings,
    /// Back arrow on the settings screen. No-op on the counter screen.
    Back,
}

impl Intent for NavigationIntent {}
