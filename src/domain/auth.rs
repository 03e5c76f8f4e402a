use crate::config::SecureString;

use super::enums::UserRole;

#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Tokens plus the profile fields cached after login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub avatar_url: String,
    pub role: UserRole,
    pub birthday: String,
    pub access_token: SecureString,
    pub refresh_token: SecureString,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub avatar_url: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub birthday: String,
    pub password: String,
}

/// Tokens are absent when the backend requires email verification first.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub avatar_url: String,
    pub role: UserRole,
    pub birthday: String,
    pub access_token: Option<SecureString>,
    pub refresh_token: Option<SecureString>,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OtpResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyPasswordRequest {
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFullNameRequest {
    pub user_id: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFullNameResponse {
    pub message: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUsernameRequest {
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUsernameResponse {
    pub message: String,
    pub username: String,
}
