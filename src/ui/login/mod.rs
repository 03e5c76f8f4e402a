mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{LoginAction, LoginEvent};
pub use reducer::LoginReducer;
pub use state::LoginUiState;
pub use view_model::LoginViewModel;
