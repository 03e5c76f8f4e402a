use crate::domain::{LanguageCode, UserRole};
use crate::ui::mvi::UiState;

/// Which profile field the user wants to edit once their password checks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeType {
    #[default]
    None,
    FullName,
    Username,
    Email,
    Role,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsUiState {
    pub user_id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: String,
    pub password: String,
    pub error_message: String,
    pub can_change_info: bool,
    pub change_type: ChangeType,
    pub is_push_notifications_enabled: bool,
    pub is_app_push_notifications_enabled: bool,
    pub language: LanguageCode,
    pub is_loading: bool,
}

impl UiState for SettingsUiState {}
