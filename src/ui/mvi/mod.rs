//! Model-View-Intent primitives for the terminal UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Key presses become intents, a reducer folds them into the next state and
//! the renderer draws that state. Side effects (persistence, network) stay in
//! the controller, outside the reducers.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
