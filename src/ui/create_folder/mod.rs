mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{CreateFolderAction, CreateFolderEvent};
pub use reducer::CreateFolderReducer;
pub use state::CreateFolderUiState;
pub use view_model::CreateFolderViewModel;
