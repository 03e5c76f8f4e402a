mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{VerifyEmailAction, VerifyEmailEvent};
pub use reducer::{VerifyEmailReducer, RESEND_COOLDOWN_SECONDS};
pub use state::VerifyEmailUiState;
pub use view_model::VerifyEmailViewModel;
