//! Screen snapshots.

/// What a surface renders for one screen.
///
/// `Default` is the screen before any input. `PartialEq` lets the store skip
/// publishing when an action changed nothing, so subscribers only wake on
/// real changes.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
