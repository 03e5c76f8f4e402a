use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginUiState {
    pub email: String,
    pub email_error: String,
    pub password: String,
    pub password_error: String,
    pub is_loading: bool,
}

impl UiState for LoginUiState {}

impl LoginUiState {
    pub fn has_errors(&self) -> bool {
        !self.email_error.is_empty() || !self.password_error.is_empty()
    }
}
