use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::LoginRequest;
use crate::repository::AuthRepository;
use crate::resource::Resource;
use crate::session::{AppManager, TokenManager};
use crate::ui::auth_session::store_auth_session;
use crate::ui::login::intent::{LoginAction, LoginEvent};
use crate::ui::login::reducer::LoginReducer;
use crate::ui::login::state::LoginUiState;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};

const LOGIN: &str = "login";

pub struct LoginViewModel {
    store: Store<LoginReducer>,
    events: EventChannel<LoginEvent>,
    tasks: TaskScope,
    auth: Arc<dyn AuthRepository>,
    tokens: TokenManager,
    app: AppManager,
}

impl LoginViewModel {
    pub fn new(auth: Arc<dyn AuthRepository>, tokens: TokenManager, app: AppManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            auth,
            tokens,
            app,
        }
    }

    fn login(&self) {
        self.store.dispatch(LoginAction::Login);
        let state = self.store.state();
        if state.has_errors() {
            tracing::debug!("Login input rejected locally");
            return;
        }

        let request = LoginRequest {
            email: state.email.trim().to_string(),
            password: state.password,
        };
        let results = self.auth.login(request);
        let store = self.store.clone();
        let events = self.events.clone();
        let tokens = self.tokens.clone();
        let app = self.app.clone();

        self.tasks.launch(LOGIN, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(LoginAction::LoginStarted);
                    }
                    Resource::Success(response) => {
                        match store_auth_session(&tokens, &app, &response) {
                            Ok(()) => {
                                tracing::info!(user_id = %response.id, "Signed in");
                                store.dispatch(LoginAction::LoginFinished(Ok(())));
                                events.emit(LoginEvent::LoginSuccess);
                            }
                            Err(err) => {
                                tracing::error!(error = %err, "Failed to persist session");
                                store.dispatch(LoginAction::LoginFinished(Err(err.to_string())));
                                events.emit(LoginEvent::LoginFailure(err.to_string()));
                            }
                        }
                    }
                    Resource::Error(message) => {
                        store.dispatch(LoginAction::LoginFinished(Err(message.clone())));
                        events.emit(LoginEvent::LoginFailure(message));
                    }
                }
            }
        });
    }
}

impl StateHolder for LoginViewModel {
    type State = LoginUiState;
    type Action = LoginAction;
    type Event = LoginEvent;

    fn handle(&self, action: LoginAction) {
        match action {
            LoginAction::Login => self.login(),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> LoginUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<LoginUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<LoginEvent> {
        self.events.subscribe()
    }
}
