mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{ClassDetailAction, ClassDetailEvent};
pub use reducer::ClassDetailReducer;
pub use state::ClassDetailUiState;
pub use view_model::ClassDetailViewModel;
