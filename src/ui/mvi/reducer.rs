//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a dialog state changes: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Must be pure. No I/O, no clock reads.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
