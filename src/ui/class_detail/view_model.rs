use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::JoinClassRequest;
use crate::repository::ClassRepository;
use crate::resource::Resource;
use crate::session::{AppManager, TokenManager};
use crate::ui::auth_session::access_token;
use crate::ui::class_detail::intent::{ClassDetailAction, ClassDetailEvent};
use crate::ui::class_detail::reducer::ClassDetailReducer;
use crate::ui::class_detail::state::ClassDetailUiState;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};

const LOAD_CLASSES: &str = "load_classes";
const JOIN_CLASS: &str = "join_class";

pub struct ClassDetailViewModel {
    store: Store<ClassDetailReducer>,
    events: EventChannel<ClassDetailEvent>,
    tasks: TaskScope,
    classes: Arc<dyn ClassRepository>,
    tokens: TokenManager,
    app: AppManager,
}

impl ClassDetailViewModel {
    pub fn new(classes: Arc<dyn ClassRepository>, tokens: TokenManager, app: AppManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            classes,
            tokens,
            app,
        }
    }

    fn init(&self, action: ClassDetailAction) {
        if !self.app.is_logged_in() {
            self.store.dispatch(ClassDetailAction::LoggedOut);
            self.events.emit(ClassDetailEvent::NavigateToWelcome);
            return;
        }
        self.store.dispatch(action);
        self.load_classes();
    }

    fn load_classes(&self) {
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => {
                self.store
                    .dispatch(ClassDetailAction::ClassesLoaded(Err(message)));
                return;
            }
        };
        let results = self
            .classes
            .get_classes_by_owner_id(token, self.app.user_id());
        let store = self.store.clone();

        self.tasks.launch(LOAD_CLASSES, LaunchPolicy::Supersede, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                let action = match resource.into_result() {
                    None => ClassDetailAction::ClassesStarted,
                    Some(result) => ClassDetailAction::ClassesLoaded(result),
                };
                store.dispatch(action);
            }
        });
    }

    fn join(&self) {
        let state = self.store.state();
        let code = state.join_class_code.trim().to_string();
        if code.is_empty() {
            tracing::debug!("No invite code to join with");
            return;
        }
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => return self.events.emit(ClassDetailEvent::ShowError(message)),
        };

        let results = self.classes.join_class(
            token,
            JoinClassRequest {
                join_token: code,
                user_id: self.app.user_id(),
            },
        );
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(JOIN_CLASS, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(ClassDetailAction::JoinStarted);
                    }
                    Resource::Success(class) => {
                        tracing::info!(class_id = %class.id, "Joined class");
                        store.dispatch(ClassDetailAction::JoinFinished(Ok(class.clone())));
                        events.emit(ClassDetailEvent::JoinedClass(class));
                    }
                    Resource::Error(message) => {
                        store.dispatch(ClassDetailAction::JoinFinished(Err(message.clone())));
                        events.emit(ClassDetailEvent::ShowError(message));
                    }
                }
            }
        });
    }
}

impl StateHolder for ClassDetailViewModel {
    type State = ClassDetailUiState;
    type Action = ClassDetailAction;
    type Event = ClassDetailEvent;

    fn handle(&self, action: ClassDetailAction) {
        match action {
            ClassDetailAction::Init { .. } => self.init(action),
            ClassDetailAction::Refresh => self.load_classes(),
            ClassDetailAction::JoinClassClicked => self.join(),
            ClassDetailAction::NavigateToWelcomeClicked => {
                self.events.emit(ClassDetailEvent::NavigateToWelcome)
            }
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> ClassDetailUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<ClassDetailUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<ClassDetailEvent> {
        self.events.subscribe()
    }
}
