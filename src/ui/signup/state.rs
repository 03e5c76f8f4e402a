use crate::domain::UserRole;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupUiState {
    pub email: String,
    pub email_error: String,
    pub password: String,
    pub password_error: String,
    /// ISO date picked by the user.
    pub birthday: String,
    pub birthday_error: String,
    pub user_role: UserRole,
    pub is_loading: bool,
}

impl UiState for SignupUiState {}

impl SignupUiState {
    pub fn has_errors(&self) -> bool {
        !self.email_error.is_empty()
            || !self.password_error.is_empty()
            || !self.birthday_error.is_empty()
    }
}
