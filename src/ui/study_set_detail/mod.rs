mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{StudySetDetailAction, StudySetDetailEvent};
pub use reducer::StudySetDetailReducer;
pub use state::StudySetDetailUiState;
pub use view_model::StudySetDetailViewModel;
