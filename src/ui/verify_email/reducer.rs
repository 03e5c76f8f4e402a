use crate::ui::mvi::Reducer;
use crate::ui::verify_email::intent::VerifyEmailAction;
use crate::ui::verify_email::state::VerifyEmailUiState;
use crate::validation;

pub const RESEND_COOLDOWN_SECONDS: u32 = 60;

pub struct VerifyEmailReducer;

impl Reducer for VerifyEmailReducer {
    type State = VerifyEmailUiState;
    type Intent = VerifyEmailAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VerifyEmailAction::Init { email } => VerifyEmailUiState { email, ..state },
            VerifyEmailAction::OtpChanged(otp) => VerifyEmailUiState {
                is_otp_valid: validation::is_valid_otp(&otp),
                otp,
                ..state
            },
            VerifyEmailAction::Tick => VerifyEmailUiState {
                countdown: state.countdown.saturating_sub(1),
                ..state
            },
            VerifyEmailAction::VerifyStarted | VerifyEmailAction::ResendStarted => {
                VerifyEmailUiState {
                    is_loading: true,
                    ..state
                }
            }
            VerifyEmailAction::VerifyFinished(_) | VerifyEmailAction::ResendFinished(Err(_)) => {
                VerifyEmailUiState {
                    is_loading: false,
                    ..state
                }
            }
            VerifyEmailAction::ResendFinished(Ok(())) => VerifyEmailUiState {
                is_loading: false,
                countdown: RESEND_COOLDOWN_SECONDS,
                ..state
            },
            VerifyEmailAction::VerifyEmail | VerifyEmailAction::ResendOtp => state,
        }
    }
}
