mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{SignupAction, SignupEvent};
pub use reducer::SignupReducer;
pub use state::SignupUiState;
pub use view_model::{SignupViewModel, INVALID_INPUT};
