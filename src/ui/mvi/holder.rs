//! Common surface of every screen state holder.

use tokio::sync::{broadcast, watch};

use super::intent::Intent;
use super::state::UiState;

/// A screen's state holder: takes actions in, exposes snapshots and
/// one-shot events out.
pub trait StateHolder: Send + Sync {
    type State: UiState;
    type Action: Intent;
    type Event: Clone + Send + std::fmt::Debug + 'static;

    /// Synchronous dispatch. Async work is launched on the holder's scope.
    fn handle(&self, action: Self::Action);

    fn state(&self) -> Self::State;

    fn subscribe_state(&self) -> watch::Receiver<Self::State>;

    /// Subscribe before triggering the action whose event you expect.
    fn subscribe_events(&self) -> broadcast::Receiver<Self::Event>;
}
