//! Session helpers shared by the screens that sign a user in.

use crate::config::SecureString;
use crate::domain::AuthResponse;
use crate::session::{AppManager, Profile, SessionError, TokenManager};

pub(crate) const NOT_SIGNED_IN: &str = "You are not signed in";

/// The stored access token, or the message to surface when there is none.
pub(crate) fn access_token(tokens: &TokenManager) -> Result<SecureString, String> {
    tokens.access_token().ok_or_else(|| {
        tracing::warn!("Authenticated action without an access token");
        NOT_SIGNED_IN.to_string()
    })
}

/// Persist tokens and profile, then flag the session as signed in.
pub(crate) fn store_auth_session(
    tokens: &TokenManager,
    app: &AppManager,
    response: &AuthResponse,
) -> Result<(), SessionError> {
    tokens.save_tokens(&response.access_token, &response.refresh_token)?;
    app.save_profile(&Profile::from(response))?;
    app.save_is_logged_in(true)
}
