use crate::domain::UserRole;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SignupAction {
    EmailChanged(String),
    PasswordChanged(String),
    BirthdayChanged(String),
    UserRoleChanged(UserRole),
    SignUp,
    SignUpStarted,
    SignUpFinished(Result<(), String>),
}

impl Intent for SignupAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum SignupEvent {
    SignUpSuccess,
    SignUpFailure(String),
    ShowError(String),
}
