use crate::ui::mvi::Reducer;
use crate::ui::signup::intent::SignupAction;
use crate::ui::signup::state::SignupUiState;
use crate::validation::{self, BIRTHDAY_REQUIRED};

pub struct SignupReducer;

impl Reducer for SignupReducer {
    type State = SignupUiState;
    type Intent = SignupAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignupAction::EmailChanged(email) => SignupUiState {
                email_error: validation::email_error(&email),
                email,
                ..state
            },
            SignupAction::PasswordChanged(password) => SignupUiState {
                password_error: validation::signup_password_error(&password),
                password,
                ..state
            },
            SignupAction::BirthdayChanged(birthday) => SignupUiState {
                birthday_error: validation::required_error(&birthday, BIRTHDAY_REQUIRED),
                birthday,
                ..state
            },
            SignupAction::UserRoleChanged(user_role) => SignupUiState { user_role, ..state },
            SignupAction::SignUp => SignupUiState {
                email_error: validation::email_error(&state.email),
                password_error: validation::signup_password_error(&state.password),
                birthday_error: validation::required_error(&state.birthday, BIRTHDAY_REQUIRED),
                ..state
            },
            SignupAction::SignUpStarted => SignupUiState {
                is_loading: true,
                ..state
            },
            SignupAction::SignUpFinished(_) => SignupUiState {
                is_loading: false,
                ..state
            },
        }
    }
}
