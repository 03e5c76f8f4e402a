/// Keys of the session store.
///
/// The `as_str()` value is the persisted key; once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    UserId,
    UserFullName,
    Username,
    UserEmail,
    UserRole,
    UserAvatar,
    UserBirthday,
    IsLoggedIn,
    PushNotifications,
    AppPushNotifications,
    Language,
}

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessToken => "access_token",
            Self::RefreshToken => "refresh_token",
            Self::UserId => "user_id",
            Self::UserFullName => "user_full_name",
            Self::Username => "username",
            Self::UserEmail => "user_email",
            Self::UserRole => "user_role",
            Self::UserAvatar => "user_avatar",
            Self::UserBirthday => "user_birthday",
            Self::IsLoggedIn => "is_logged_in",
            Self::PushNotifications => "push_notifications",
            Self::AppPushNotifications => "app_push_notifications",
            Self::Language => "language",
        }
    }

    pub fn all() -> &'static [SessionKey] {
        &[
            Self::AccessToken,
            Self::RefreshToken,
            Self::UserId,
            Self::UserFullName,
            Self::Username,
            Self::UserEmail,
            Self::UserRole,
            Self::UserAvatar,
            Self::UserBirthday,
            Self::IsLoggedIn,
            Self::PushNotifications,
            Self::AppPushNotifications,
            Self::Language,
        ]
    }

    /// Parse a persisted key. Unknown keys return `None` (forward compat).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.as_str() == s)
    }

    /// Whether the key holds a secret that must never be logged.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::AccessToken | Self::RefreshToken)
    }
}
