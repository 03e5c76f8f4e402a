use crate::domain::LanguageCode;
use crate::session::Profile;
use crate::ui::mvi::Intent;
use crate::ui::settings::state::ChangeType;

#[derive(Debug, Clone)]
pub enum SettingsAction {
    /// Re-read the cached profile and preferences.
    Refresh,
    Logout,
    PasswordChanged(String),
    /// Check the password before opening the editor for `change_type`.
    Submit,
    CanChangeInfoChanged(bool),
    ChangeTypeChanged(ChangeType),
    PushNotificationsChanged(bool),
    AppPushNotificationsChanged(bool),
    LanguageChanged(LanguageCode),
    Loaded {
        profile: Profile,
        push_notifications: bool,
        app_push_notifications: bool,
        language: LanguageCode,
    },
    VerifyStarted,
    /// `Ok(matched)` when the backend answered.
    VerifyFinished(Result<bool, String>),
}

impl Intent for SettingsAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    NavigateToChangeFullName,
    NavigateToChangeUsername,
    NavigateToChangeEmail,
    NavigateToChangeRole,
    NavigateToLogin,
    ShowError(String),
}
