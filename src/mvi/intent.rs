//! Intent marker trait.

/// A named request to change state.
///
/// Key presses on either screen, slider moves and timer ticks all end up
/// as intents handed to a reducer.
pub trait Intent: Send + 'static {}
