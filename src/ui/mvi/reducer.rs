//! Pure state transitions.

use super::intent::Intent;
use super::state::UiState;

/// Folds one screen action into the next snapshot.
///
/// Validation messages, loading flags and counters are all derived here.
/// Backend calls and one-shot events stay in the view model, which reads the
/// reduced state to decide whether to launch anything.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
