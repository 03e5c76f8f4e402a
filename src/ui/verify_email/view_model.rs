use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::VerifyEmailRequest;
use crate::repository::AuthRepository;
use crate::resource::Resource;
use crate::session::{AppManager, TokenManager};
use crate::ui::auth_session::store_auth_session;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};
use crate::ui::verify_email::intent::{VerifyEmailAction, VerifyEmailEvent};
use crate::ui::verify_email::reducer::VerifyEmailReducer;
use crate::ui::verify_email::state::VerifyEmailUiState;

const VERIFY: &str = "verify_email";
const RESEND: &str = "resend_otp";
const COUNTDOWN: &str = "resend_countdown";

pub struct VerifyEmailViewModel {
    store: Store<VerifyEmailReducer>,
    events: EventChannel<VerifyEmailEvent>,
    tasks: Arc<TaskScope>,
    auth: Arc<dyn AuthRepository>,
    tokens: TokenManager,
    app: AppManager,
}

impl VerifyEmailViewModel {
    pub fn new(auth: Arc<dyn AuthRepository>, tokens: TokenManager, app: AppManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: Arc::new(TaskScope::new()),
            auth,
            tokens,
            app,
        }
    }

    fn verify(&self) {
        let state = self.store.state();
        if !state.is_otp_valid {
            tracing::debug!("Verification code incomplete, not submitting");
            return;
        }

        let results = self.auth.verify_email(VerifyEmailRequest {
            email: state.email,
            otp: state.otp,
        });
        let store = self.store.clone();
        let events = self.events.clone();
        let tokens = self.tokens.clone();
        let app = self.app.clone();

        self.tasks.launch(VERIFY, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(VerifyEmailAction::VerifyStarted);
                    }
                    Resource::Success(response) => {
                        let saved = store_auth_session(&tokens, &app, &response)
                            .map_err(|err| err.to_string());
                        store.dispatch(VerifyEmailAction::VerifyFinished(saved.clone()));
                        match saved {
                            Ok(()) => events.emit(VerifyEmailEvent::VerifySuccess),
                            Err(message) => {
                                tracing::error!(error = %message, "Failed to persist session");
                                events.emit(VerifyEmailEvent::VerifyFailure(message));
                            }
                        }
                    }
                    Resource::Error(message) => {
                        store.dispatch(VerifyEmailAction::VerifyFinished(Err(message.clone())));
                        events.emit(VerifyEmailEvent::VerifyFailure(message));
                    }
                }
            }
        });
    }

    fn resend(&self) {
        let state = self.store.state();
        if !state.can_resend() {
            tracing::debug!(countdown = state.countdown, "Resend refused during cooldown");
            return;
        }

        let results = self.auth.resend_otp(state.email);
        let store = self.store.clone();
        let events = self.events.clone();
        let scope = Arc::downgrade(&self.tasks);

        self.tasks.launch(RESEND, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(VerifyEmailAction::ResendStarted);
                    }
                    Resource::Success(_) => {
                        store.dispatch(VerifyEmailAction::ResendFinished(Ok(())));
                        start_countdown(&scope, store.clone());
                        events.emit(VerifyEmailEvent::ResendSuccess);
                    }
                    Resource::Error(message) => {
                        store.dispatch(VerifyEmailAction::ResendFinished(Err(message.clone())));
                        events.emit(VerifyEmailEvent::ResendFailure(message));
                    }
                }
            }
        });
    }
}

/// Tick once per second until the cooldown reaches zero.
fn start_countdown(scope: &Weak<TaskScope>, store: Store<VerifyEmailReducer>) {
    let Some(scope) = scope.upgrade() else {
        return;
    };

    scope.launch(COUNTDOWN, LaunchPolicy::Supersede, async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick completes immediately.
        interval.tick().await;
        while store.state().countdown > 0 {
            interval.tick().await;
            store.dispatch(VerifyEmailAction::Tick);
        }
    });
}

impl StateHolder for VerifyEmailViewModel {
    type State = VerifyEmailUiState;
    type Action = VerifyEmailAction;
    type Event = VerifyEmailEvent;

    fn handle(&self, action: VerifyEmailAction) {
        match action {
            VerifyEmailAction::VerifyEmail => self.verify(),
            VerifyEmailAction::ResendOtp => self.resend(),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> VerifyEmailUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<VerifyEmailUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<VerifyEmailEvent> {
        self.events.subscribe()
    }
}
