use super::intent::Intent;
use super::state::UiState;

/// The only place screen state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure: no I/O, no clocks.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
