pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod slider;
pub mod terminal_guard;
pub mod theme;
