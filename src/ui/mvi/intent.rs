//! Base trait for intents.

/// Marker trait for intent objects: operator actions (key presses, text
/// input) and completions the controller forwards (sync results, ticks).
pub trait Intent: Send + 'static {}
