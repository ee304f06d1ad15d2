//! Screen navigation feature module.
//!
//! Two screens share one counter store: the counter itself and the
//! interval settings.
//!
//! - `state.rs` - which screen is showing
//! - `intent.rs` - OpenSettings, Back
//! - `reducer.rs` - screen transitions

mod intent;
mod reducer;
mod state;

pub use intent::NavigationIntent;
pub use reducer::NavigationReducer;
pub use state::{NavigationState, Screen};
