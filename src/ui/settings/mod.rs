mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{SettingsAction, SettingsEvent};
pub use reducer::{SettingsReducer, PASSWORD_INCORRECT};
pub use state::{ChangeType, SettingsUiState};
pub use view_model::SettingsViewModel;
