use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum VerifyEmailAction {
    /// Navigation argument: the address the code was sent to.
    Init { email: String },
    OtpChanged(String),
    VerifyEmail,
    ResendOtp,
    /// One second of the resend countdown elapsed.
    Tick,
    VerifyStarted,
    VerifyFinished(Result<(), String>),
    ResendStarted,
    ResendFinished(Result<(), String>),
}

impl Intent for VerifyEmailAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyEmailEvent {
    VerifySuccess,
    VerifyFailure(String),
    ResendSuccess,
    ResendFailure(String),
}
