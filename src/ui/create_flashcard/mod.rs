mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{CreateFlashCardAction, CreateFlashCardEvent};
pub use reducer::CreateFlashCardReducer;
pub use state::CreateFlashCardUiState;
pub use view_model::CreateFlashCardViewModel;
