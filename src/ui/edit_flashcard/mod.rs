mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{EditFlashCardAction, EditFlashCardEvent};
pub use reducer::EditFlashCardReducer;
pub use state::EditFlashCardUiState;
pub use view_model::EditFlashCardViewModel;
