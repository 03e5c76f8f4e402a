use crate::ui::login::intent::LoginAction;
use crate::ui::login::state::LoginUiState;
use crate::ui::mvi::Reducer;
use crate::validation;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginUiState;
    type Intent = LoginAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginAction::EmailChanged(email) => LoginUiState {
                email_error: validation::email_error(&email),
                email,
                ..state
            },
            LoginAction::PasswordChanged(password) => LoginUiState {
                password_error: validation::login_password_error(&password),
                password,
                ..state
            },
            LoginAction::Login => LoginUiState {
                email_error: validation::email_error(&state.email),
                password_error: validation::login_password_error(&state.password),
                ..state
            },
            LoginAction::LoginStarted => LoginUiState {
                is_loading: true,
                ..state
            },
            // The password is not kept around once it has been accepted.
            LoginAction::LoginFinished(Ok(())) => LoginUiState {
                is_loading: false,
                password: String::new(),
                ..state
            },
            LoginAction::LoginFinished(Err(_)) => LoginUiState {
                is_loading: false,
                ..state
            },
        }
    }
}
