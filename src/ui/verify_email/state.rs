use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerifyEmailUiState {
    pub email: String,
    pub otp: String,
    pub is_otp_valid: bool,
    /// Seconds left before another code may be requested.
    pub countdown: u32,
    pub is_loading: bool,
}

impl UiState for VerifyEmailUiState {}

impl VerifyEmailUiState {
    pub fn can_resend(&self) -> bool {
        self.countdown == 0
    }
}
