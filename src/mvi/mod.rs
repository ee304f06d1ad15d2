//! Model-View-Intent primitives shared by the counter core and the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ observers / screens
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with a side effect (starting a timer,
//! notifying observers, writing to the terminal) happens around the
//! reducer call, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
