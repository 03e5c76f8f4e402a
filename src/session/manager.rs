use std::sync::Arc;

use crate::config::SecureString;
use crate::domain::{AuthResponse, LanguageCode, UserRole};

use super::{KeyValueStore, SessionError, SessionKey};

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Keys owned by [`AppManager`] and wiped at logout.
const PROFILE_KEYS: [SessionKey; 11] = [
    SessionKey::UserId,
    SessionKey::UserFullName,
    SessionKey::Username,
    SessionKey::UserEmail,
    SessionKey::UserRole,
    SessionKey::UserAvatar,
    SessionKey::UserBirthday,
    SessionKey::IsLoggedIn,
    SessionKey::PushNotifications,
    SessionKey::AppPushNotifications,
    SessionKey::Language,
];

/// Access and refresh tokens.
#[derive(Clone)]
pub struct TokenManager {
    store: Arc<dyn KeyValueStore>,
}

impl TokenManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<SecureString> {
        self.store
            .get(SessionKey::AccessToken)
            .filter(|token| !token.is_empty())
            .map(SecureString::new)
    }

    pub fn refresh_token(&self) -> Option<SecureString> {
        self.store
            .get(SessionKey::RefreshToken)
            .filter(|token| !token.is_empty())
            .map(SecureString::new)
    }

    pub fn save_tokens(
        &self,
        access: &SecureString,
        refresh: &SecureString,
    ) -> Result<(), SessionError> {
        self.store
            .set(SessionKey::AccessToken, access.expose().to_string())?;
        self.store
            .set(SessionKey::RefreshToken, refresh.expose().to_string())
    }

    pub fn clear_tokens(&self) -> Result<(), SessionError> {
        self.store
            .remove_all(&[SessionKey::AccessToken, SessionKey::RefreshToken])
    }
}

/// Profile fields cached locally after authentication.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub avatar_url: String,
    pub role: UserRole,
    pub birthday: String,
}

impl From<&AuthResponse> for Profile {
    fn from(response: &AuthResponse) -> Self {
        Self {
            id: response.id.clone(),
            email: response.email.clone(),
            username: response.username.clone(),
            full_name: response.full_name.clone(),
            avatar_url: response.avatar_url.clone(),
            role: response.role,
            birthday: response.birthday.clone(),
        }
    }
}

/// Cached profile and preference flags.
#[derive(Clone)]
pub struct AppManager {
    store: Arc<dyn KeyValueStore>,
}

impl AppManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn string(&self, key: SessionKey) -> String {
        self.store.get(key).unwrap_or_default()
    }

    fn flag(&self, key: SessionKey) -> bool {
        self.store.get(key).as_deref() == Some(TRUE)
    }

    fn set_flag(&self, key: SessionKey, value: bool) -> Result<(), SessionError> {
        let value = if value { TRUE } else { FALSE };
        self.store.set(key, value.to_string())
    }

    pub fn user_id(&self) -> String {
        self.string(SessionKey::UserId)
    }

    pub fn profile(&self) -> Profile {
        Profile {
            id: self.string(SessionKey::UserId),
            email: self.string(SessionKey::UserEmail),
            username: self.string(SessionKey::Username),
            full_name: self.string(SessionKey::UserFullName),
            avatar_url: self.string(SessionKey::UserAvatar),
            role: UserRole::parse(&self.string(SessionKey::UserRole)),
            birthday: self.string(SessionKey::UserBirthday),
        }
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<(), SessionError> {
        self.store.set(SessionKey::UserId, profile.id.clone())?;
        self.store.set(SessionKey::UserEmail, profile.email.clone())?;
        self.store.set(SessionKey::Username, profile.username.clone())?;
        self.store
            .set(SessionKey::UserFullName, profile.full_name.clone())?;
        self.store
            .set(SessionKey::UserAvatar, profile.avatar_url.clone())?;
        self.store
            .set(SessionKey::UserRole, profile.role.as_str().to_string())?;
        self.store
            .set(SessionKey::UserBirthday, profile.birthday.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.flag(SessionKey::IsLoggedIn)
    }

    pub fn save_is_logged_in(&self, value: bool) -> Result<(), SessionError> {
        self.set_flag(SessionKey::IsLoggedIn, value)
    }

    pub fn push_notifications(&self) -> bool {
        self.flag(SessionKey::PushNotifications)
    }

    pub fn save_push_notifications(&self, value: bool) -> Result<(), SessionError> {
        self.set_flag(SessionKey::PushNotifications, value)
    }

    pub fn app_push_notifications(&self) -> bool {
        self.flag(SessionKey::AppPushNotifications)
    }

    pub fn save_app_push_notifications(&self, value: bool) -> Result<(), SessionError> {
        self.set_flag(SessionKey::AppPushNotifications, value)
    }

    /// Unknown or missing codes read as the default language.
    pub fn language(&self) -> LanguageCode {
        self.store
            .get(SessionKey::Language)
            .and_then(|code| LanguageCode::parse(&code))
            .unwrap_or_default()
    }

    pub fn save_language(&self, language: LanguageCode) -> Result<(), SessionError> {
        self.store
            .set(SessionKey::Language, language.as_str().to_string())
    }

    /// Forget the profile and every preference.
    pub fn clear_all_data(&self) -> Result<(), SessionError> {
        self.store.remove_all(&PROFILE_KEYS)
    }
}
