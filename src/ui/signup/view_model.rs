use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};
use uuid::Uuid;

use crate::domain::{SignupRequest, SignupResponse};
use crate::repository::AuthRepository;
use crate::resource::Resource;
use crate::session::{SessionError, TokenManager};
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};
use crate::ui::signup::intent::{SignupAction, SignupEvent};
use crate::ui::signup::reducer::SignupReducer;
use crate::ui::signup::state::SignupUiState;
use crate::validation;

pub const INVALID_INPUT: &str = "Invalid input";

const SIGN_UP: &str = "sign_up";
/// Bundled avatars are numbered `0..AVATAR_COUNT`.
const AVATAR_COUNT: u128 = 100;

pub struct SignupViewModel {
    store: Store<SignupReducer>,
    events: EventChannel<SignupEvent>,
    tasks: TaskScope,
    auth: Arc<dyn AuthRepository>,
    tokens: TokenManager,
}

impl SignupViewModel {
    pub fn new(auth: Arc<dyn AuthRepository>, tokens: TokenManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            auth,
            tokens,
        }
    }

    fn sign_up(&self) {
        self.store.dispatch(SignupAction::SignUp);
        let state = self.store.state();
        if state.has_errors() {
            self.events.emit(SignupEvent::ShowError(INVALID_INPUT.to_string()));
            return;
        }

        let email = state.email.trim().to_string();
        let request = SignupRequest {
            avatar_url: random_avatar_index(),
            username: validation::username_from_email(&email),
            full_name: validation::full_name_from_email(&email),
            email,
            role: state.user_role,
            birthday: state.birthday,
            password: state.password,
        };
        let results = self.auth.signup(request);
        let store = self.store.clone();
        let events = self.events.clone();
        let tokens = self.tokens.clone();

        self.tasks.launch(SIGN_UP, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(SignupAction::SignUpStarted);
                    }
                    Resource::Success(response) => match save_tokens(&tokens, &response) {
                        Ok(()) => {
                            tracing::info!(
                                user_id = %response.id,
                                verified = response.is_verified,
                                "Account created"
                            );
                            store.dispatch(SignupAction::SignUpFinished(Ok(())));
                            events.emit(SignupEvent::SignUpSuccess);
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to persist tokens");
                            store.dispatch(SignupAction::SignUpFinished(Err(err.to_string())));
                            events.emit(SignupEvent::SignUpFailure(err.to_string()));
                        }
                    },
                    Resource::Error(message) => {
                        store.dispatch(SignupAction::SignUpFinished(Err(message.clone())));
                        events.emit(SignupEvent::SignUpFailure(message));
                    }
                }
            }
        });
    }
}

/// Unverified accounts come back without tokens; there is nothing to keep.
fn save_tokens(tokens: &TokenManager, response: &SignupResponse) -> Result<(), SessionError> {
    match (&response.access_token, &response.refresh_token) {
        (Some(access), Some(refresh)) => tokens.save_tokens(access, refresh),
        _ => Ok(()),
    }
}

fn random_avatar_index() -> String {
    (Uuid::new_v4().as_u128() % AVATAR_COUNT).to_string()
}

impl StateHolder for SignupViewModel {
    type State = SignupUiState;
    type Action = SignupAction;
    type Event = SignupEvent;

    fn handle(&self, action: SignupAction) {
        match action {
            SignupAction::SignUp => self.sign_up(),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> SignupUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<SignupUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<SignupEvent> {
        self.events.subscribe()
    }
}
