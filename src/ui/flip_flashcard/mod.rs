mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{FlipFlashCardAction, FlipFlashCardEvent};
pub use reducer::FlipFlashCardReducer;
pub use state::FlipFlashCardUiState;
pub use view_model::FlipFlashCardViewModel;
