use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginAction {
    EmailChanged(String),
    PasswordChanged(String),
    /// Re-validates every field, then signs in when they pass.
    Login,
    LoginStarted,
    LoginFinished(Result<(), String>),
}

impl Intent for LoginAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    LoginSuccess,
    LoginFailure(String),
}
