//! State marker trait.

/// A snapshot the screens render from.
///
/// Snapshots are cloned out to observers, compared to skip redundant
/// redraws, and start from a well-defined default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
