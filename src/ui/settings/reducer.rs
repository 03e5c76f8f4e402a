use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsAction;
use crate::ui::settings::state::SettingsUiState;

pub const PASSWORD_INCORRECT: &str = "Password is incorrect";

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsUiState;
    type Intent = SettingsAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsAction::PasswordChanged(password) => SettingsUiState {
                password,
                error_message: String::new(),
                ..state
            },
            SettingsAction::CanChangeInfoChanged(can_change_info) => SettingsUiState {
                can_change_info,
                ..state
            },
            SettingsAction::ChangeTypeChanged(change_type) => SettingsUiState {
                change_type,
                ..state
            },
            SettingsAction::PushNotificationsChanged(enabled) => SettingsUiState {
                is_push_notifications_enabled: enabled,
                ..state
            },
            SettingsAction::AppPushNotificationsChanged(enabled) => SettingsUiState {
                is_app_push_notifications_enabled: enabled,
                ..state
            },
            SettingsAction::LanguageChanged(language) => SettingsUiState { language, ..state },
            SettingsAction::Loaded {
                profile,
                push_notifications,
                app_push_notifications,
                language,
            } => SettingsUiState {
                user_id: profile.id,
                full_name: profile.full_name,
                username: profile.username,
                email: profile.email,
                role: profile.role,
                avatar_url: profile.avatar_url,
                is_push_notifications_enabled: push_notifications,
                is_app_push_notifications_enabled: app_push_notifications,
                language,
                ..state
            },
            SettingsAction::VerifyStarted => SettingsUiState {
                is_loading: true,
                ..state
            },
            SettingsAction::VerifyFinished(Ok(true)) => SettingsUiState {
                is_loading: false,
                can_change_info: true,
                password: String::new(),
                error_message: String::new(),
                ..state
            },
            SettingsAction::VerifyFinished(Ok(false) | Err(_)) => SettingsUiState {
                is_loading: false,
                can_change_info: false,
                error_message: PASSWORD_INCORRECT.to_string(),
                ..state
            },
            SettingsAction::Refresh | SettingsAction::Logout | SettingsAction::Submit => state,
        }
    }
}
