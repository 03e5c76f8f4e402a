use std::sync::{Arc, Weak};

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::config::SecureString;
use crate::domain::ResetType;
use crate::repository::StudySetRepository;
use crate::resource::Resource;
use crate::session::TokenManager;
use crate::ui::auth_session::access_token;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};
use crate::ui::study_set_detail::intent::{StudySetDetailAction, StudySetDetailEvent};
use crate::ui::study_set_detail::reducer::StudySetDetailReducer;
use crate::ui::study_set_detail::state::StudySetDetailUiState;

const LOAD: &str = "load_study_set";
const DELETE: &str = "delete_study_set";
const RESET: &str = "reset_progress";

pub struct StudySetDetailViewModel {
    store: Store<StudySetDetailReducer>,
    events: EventChannel<StudySetDetailEvent>,
    tasks: Arc<TaskScope>,
    study_sets: Arc<dyn StudySetRepository>,
    tokens: TokenManager,
}

impl StudySetDetailViewModel {
    pub fn new(study_sets: Arc<dyn StudySetRepository>, tokens: TokenManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: Arc::new(TaskScope::new()),
            study_sets,
            tokens,
        }
    }

    fn token_or_report(&self) -> Option<SecureString> {
        match access_token(&self.tokens) {
            Ok(token) => Some(token),
            Err(message) => {
                self.events.emit(StudySetDetailEvent::ShowError(message));
                None
            }
        }
    }

    fn load(&self, id: String) {
        self.store.dispatch(StudySetDetailAction::Load { id: id.clone() });
        let Some(token) = self.token_or_report() else {
            return;
        };
        start_load(
            &Arc::downgrade(&self.tasks),
            self.study_sets.clone(),
            token,
            id,
            self.store.clone(),
        );
    }

    fn delete(&self) {
        let Some(token) = self.token_or_report() else {
            return;
        };
        let results = self.study_sets.delete_study_set(token, self.store.state().id);
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(DELETE, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(StudySetDetailAction::MutationStarted);
                    }
                    Resource::Success(()) => {
                        store.dispatch(StudySetDetailAction::MutationFinished(Ok(())));
                        events.emit(StudySetDetailEvent::StudySetDeleted);
                    }
                    Resource::Error(message) => {
                        store.dispatch(StudySetDetailAction::MutationFinished(Err(message.clone())));
                        events.emit(StudySetDetailEvent::ShowError(message));
                    }
                }
            }
        });
    }

    fn reset(&self, reset_type: ResetType) {
        let Some(token) = self.token_or_report() else {
            return;
        };
        let id = self.store.state().id;
        let results = self
            .study_sets
            .reset_progress(token.clone(), id.clone(), reset_type);
        let store = self.store.clone();
        let events = self.events.clone();
        let study_sets = self.study_sets.clone();
        let scope = Arc::downgrade(&self.tasks);

        self.tasks.launch(RESET, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(StudySetDetailAction::MutationStarted);
                    }
                    Resource::Success(()) => {
                        tracing::info!(study_set_id = %id, reset = reset_type.as_str(), "Progress reset");
                        store.dispatch(StudySetDetailAction::MutationFinished(Ok(())));
                        start_load(&scope, study_sets.clone(), token.clone(), id.clone(), store.clone());
                        events.emit(StudySetDetailEvent::ProgressReset(reset_type));
                    }
                    Resource::Error(message) => {
                        store.dispatch(StudySetDetailAction::MutationFinished(Err(message.clone())));
                        events.emit(StudySetDetailEvent::ShowError(message));
                    }
                }
            }
        });
    }
}

/// (Re)load the set, replacing any load still in flight.
fn start_load(
    scope: &Weak<TaskScope>,
    study_sets: Arc<dyn StudySetRepository>,
    token: SecureString,
    id: String,
    store: Store<StudySetDetailReducer>,
) {
    let Some(scope) = scope.upgrade() else {
        return;
    };
    let results = study_sets.get_study_set_by_id(token, id);

    scope.launch(LOAD, LaunchPolicy::Supersede, async move {
        let mut results = results;
        while let Some(resource) = results.next().await {
            let action = match resource.into_result() {
                None => StudySetDetailAction::LoadStarted,
                Some(result) => StudySetDetailAction::Loaded(result),
            };
            store.dispatch(action);
        }
    });
}

impl StateHolder for StudySetDetailViewModel {
    type State = StudySetDetailUiState;
    type Action = StudySetDetailAction;
    type Event = StudySetDetailEvent;

    fn handle(&self, action: StudySetDetailAction) {
        match action {
            StudySetDetailAction::Load { id } => self.load(id),
            StudySetDetailAction::Delete => self.delete(),
            StudySetDetailAction::ResetProgress(reset_type) => self.reset(reset_type),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> StudySetDetailUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<StudySetDetailUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<StudySetDetailEvent> {
        self.events.subscribe()
    }
}
