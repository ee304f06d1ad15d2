//! Interval slider model for the settings screen.
//!
//! The slider is the only place interval bounds are enforced: 1 to 10
//! seconds in whole-second steps. The store accepts whatever it is given.

/// A slider position, always within bounds and on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSlider {
    ms: u64,
}

impl IntervalSlider {
    pub const MIN_MS: u64 = 1_000;
    pub const MAX_MS: u64 = 10_000;
    pub const STEP_MS: u64 = 1_000;

    /// Snap an arbitrary interval to the nearest slider position.
    pub fn from_ms(ms: u64) -> Self {
        let clamped = ms.clamp(Self::MIN_MS, Self::MAX_MS);
        let steps = (clamped - Self::MIN_MS + Self::STEP_MS / 2) / Self::STEP_MS;
        Self {
            ms: Self::MIN_MS + steps * Self::STEP_MS,
        }
    }

    pub fn is_valid_ms(ms: u64) -> bool {
        (Self::MIN_MS..=Self::MAX_MS).contains(&ms) && (ms - Self::MIN_MS) % Self::STEP_MS == 0
    }

    pub fn min() -> Self {
        Self { ms: Self::MIN_MS }
    }

    pub fn max() -> Self {
        Self { ms: Self::MAX_MS }
    }

    pub fn ms(&self) -> u64 {
        self.ms
    }

    pub fn seconds(&self) -> u64 {
        self.ms / 1_000
    }

    /// One step longer, saturating at the maximum.
    pub fn step_up(self) -> Self {
        Self {
            ms: (self.ms + Self::STEP_MS).min(Self::MAX_MS),
        }
    }

    /// One step shorter, saturating at the minimum.
    pub fn step_down(self) -> Self {
        Self {
            ms: self.ms.saturating_sub(Self::STEP_MS).max(Self::MIN_MS),
        }
    }

    /// Fill fraction for gauge rendering, `0.0` at minimum and `1.0` at maximum.
    pub fn ratio(&self) -> f64 {
        (self.ms - Self::MIN_MS) as f64 / (Self::MAX_MS - Self::MIN_MS) as f64
    }
}
