//! Model-View-Intent (MVI) runtime shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Surface
//!    ↑          │                     │
//!    │          └──→ Event ───────────┤
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, published through a `watch` channel
//! - **Action**: User input or an async result fed back to the reducer
//! - **Reducer**: Pure function that derives the next snapshot
//! - **Event**: One-shot side effect on a bounded broadcast channel
//! - **TaskScope**: Keyed background work, aborted with the holder

mod events;
mod holder;
mod intent;
mod reducer;
mod state;
mod store;
mod tasks;

pub use events::{EventChannel, EVENT_CAPACITY};
pub use holder::StateHolder;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
pub use tasks::{LaunchPolicy, TaskScope};
