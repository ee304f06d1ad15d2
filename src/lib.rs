//! Counter with an optional auto-increment timer, driven from a terminal UI.
//!
//! The core lives in [`counter`]: a [`counter::CounterStore`] that serializes
//! every mutation and keeps its [`counter::AutoIncrementScheduler`] in step
//! with the `auto_enabled` flag. [`ui`] renders the counter and settings
//! screens on top of it.

pub mod config;
pub mod counter;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod ui;
