//! Field validators shared by the form screens.
//!
//! Validators return the inline message to show, or an empty string when the
//! value is accepted. Nothing here touches the network.

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const WEAK_PASSWORD: &str = "Password is too weak!";
pub const BIRTHDAY_REQUIRED: &str = "Birthday is required";
pub const TERM_REQUIRED: &str = "Term is required";
pub const DEFINITION_REQUIRED: &str = "Definition is required";
pub const TITLE_REQUIRED: &str = "Title is required";

pub const OTP_LENGTH: usize = 6;
const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// At least eight characters mixing upper case, lower case, digits and symbols.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Exactly six ASCII digits.
pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == OTP_LENGTH && otp.bytes().all(|b| b.is_ascii_digit())
}

pub fn email_error(email: &str) -> String {
    message_if(!is_valid_email(email), INVALID_EMAIL)
}

pub fn login_password_error(password: &str) -> String {
    message_if(password.is_empty(), PASSWORD_REQUIRED)
}

pub fn signup_password_error(password: &str) -> String {
    message_if(!is_strong_password(password), WEAK_PASSWORD)
}

pub fn required_error(value: &str, message: &str) -> String {
    message_if(value.trim().is_empty(), message)
}

fn message_if(invalid: bool, message: &str) -> String {
    if invalid {
        message.to_string()
    } else {
        String::new()
    }
}

/// Local part of an address, used as the default username.
pub fn username_from_email(email: &str) -> String {
    email
        .trim()
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// "jane.doe+work@x.com" becomes "Jane Doe Work".
pub fn full_name_from_email(email: &str) -> String {
    username_from_email(email)
        .split(['.', '_', '-', '+'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
