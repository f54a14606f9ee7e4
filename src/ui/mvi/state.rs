//! Base trait for UI state.

/// Marker trait for view state: cloneable, comparable, with an idle default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
