use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::VerifyPasswordRequest;
use crate::repository::AuthRepository;
use crate::resource::Resource;
use crate::session::{AppManager, SessionError, TokenManager};
use crate::ui::auth_session::access_token;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};
use crate::ui::settings::intent::{SettingsAction, SettingsEvent};
use crate::ui::settings::reducer::SettingsReducer;
use crate::ui::settings::state::{ChangeType, SettingsUiState};

const VERIFY_PASSWORD: &str = "verify_password";

pub struct SettingsViewModel {
    store: Store<SettingsReducer>,
    events: EventChannel<SettingsEvent>,
    tasks: TaskScope,
    auth: Arc<dyn AuthRepository>,
    tokens: TokenManager,
    app: AppManager,
}

impl SettingsViewModel {
    /// Starts populated from the cached profile.
    pub fn new(auth: Arc<dyn AuthRepository>, tokens: TokenManager, app: AppManager) -> Self {
        let view_model = Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            auth,
            tokens,
            app,
        };
        view_model.refresh();
        view_model
    }

    fn refresh(&self) {
        self.store.dispatch(SettingsAction::Loaded {
            profile: self.app.profile(),
            push_notifications: self.app.push_notifications(),
            app_push_notifications: self.app.app_push_notifications(),
            language: self.app.language(),
        });
    }

    fn logout(&self) {
        let cleared = self
            .tokens
            .clear_tokens()
            .and_then(|()| self.app.clear_all_data());
        match cleared {
            Ok(()) => {
                tracing::info!("Signed out");
                self.store.dispatch(SettingsAction::Loaded {
                    profile: Default::default(),
                    push_notifications: false,
                    app_push_notifications: false,
                    language: Default::default(),
                });
                self.events.emit(SettingsEvent::NavigateToLogin);
            }
            Err(err) => self.report(err),
        }
    }

    /// Apply a preference toggle and persist it.
    fn save_preference(
        &self,
        action: SettingsAction,
        save: impl FnOnce(&AppManager) -> Result<(), SessionError>,
    ) {
        self.store.dispatch(action);
        if let Err(err) = save(&self.app) {
            self.report(err);
        }
    }

    fn report(&self, err: SessionError) {
        tracing::error!(error = %err, "Session write failed");
        self.events.emit(SettingsEvent::ShowError(err.to_string()));
    }

    fn submit(&self) {
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => return self.events.emit(SettingsEvent::ShowError(message)),
        };
        let state = self.store.state();
        let results = self.auth.verify_password(
            token,
            VerifyPasswordRequest {
                user_id: state.user_id,
                password: state.password,
            },
        );
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(VERIFY_PASSWORD, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(SettingsAction::VerifyStarted);
                    }
                    Resource::Success(matched) => {
                        store.dispatch(SettingsAction::VerifyFinished(Ok(matched)));
                        if matched {
                            if let Some(event) = navigation_for(store.state().change_type) {
                                events.emit(event);
                            }
                        }
                    }
                    Resource::Error(message) => {
                        store.dispatch(SettingsAction::VerifyFinished(Err(message)));
                    }
                }
            }
        });
    }
}

fn navigation_for(change_type: ChangeType) -> Option<SettingsEvent> {
    match change_type {
        ChangeType::FullName => Some(SettingsEvent::NavigateToChangeFullName),
        ChangeType::Username => Some(SettingsEvent::NavigateToChangeUsername),
        ChangeType::Email => Some(SettingsEvent::NavigateToChangeEmail),
        ChangeType::Role => Some(SettingsEvent::NavigateToChangeRole),
        ChangeType::None => None,
    }
}

impl StateHolder for SettingsViewModel {
    type State = SettingsUiState;
    type Action = SettingsAction;
    type Event = SettingsEvent;

    fn handle(&self, action: SettingsAction) {
        match action {
            SettingsAction::Refresh => self.refresh(),
            SettingsAction::Logout => self.logout(),
            SettingsAction::Submit => self.submit(),
            SettingsAction::PushNotificationsChanged(enabled) => {
                self.save_preference(action, |app| app.save_push_notifications(enabled))
            }
            SettingsAction::AppPushNotificationsChanged(enabled) => {
                self.save_preference(action, |app| app.save_app_push_notifications(enabled))
            }
            SettingsAction::LanguageChanged(language) => {
                self.save_preference(action, |app| app.save_language(language))
            }
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> SettingsUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<SettingsUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }
}
