use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::CreateFolderRequest;
use crate::repository::FolderRepository;
use crate::resource::Resource;
use crate::session::{AppManager, TokenManager};
use crate::ui::auth_session::access_token;
use crate::ui::create_folder::intent::{CreateFolderAction, CreateFolderEvent};
use crate::ui::create_folder::reducer::CreateFolderReducer;
use crate::ui::create_folder::state::CreateFolderUiState;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};

const SAVE: &str = "create_folder";

pub struct CreateFolderViewModel {
    store: Store<CreateFolderReducer>,
    events: EventChannel<CreateFolderEvent>,
    tasks: TaskScope,
    folders: Arc<dyn FolderRepository>,
    tokens: TokenManager,
    app: AppManager,
}

impl CreateFolderViewModel {
    pub fn new(folders: Arc<dyn FolderRepository>, tokens: TokenManager, app: AppManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            folders,
            tokens,
            app,
        }
    }

    fn save(&self) {
        self.store.dispatch(CreateFolderAction::SaveClicked);
        let state = self.store.state();
        if !state.title_error.is_empty() {
            return;
        }
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => return self.events.emit(CreateFolderEvent::ShowError(message)),
        };

        let request = CreateFolderRequest {
            title: state.title.trim().to_string(),
            description: state.description.trim().to_string(),
            is_public: state.is_public,
            owner_id: self.app.user_id(),
        };
        let results = self.folders.create_folder(token, request);
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(SAVE, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(CreateFolderAction::SaveStarted);
                    }
                    Resource::Success(folder) => {
                        let id = folder.id.clone();
                        store.dispatch(CreateFolderAction::SaveFinished(Ok(folder)));
                        events.emit(CreateFolderEvent::FolderCreated { id });
                    }
                    Resource::Error(message) => {
                        store.dispatch(CreateFolderAction::SaveFinished(Err(message.clone())));
                        events.emit(CreateFolderEvent::ShowError(message));
                    }
                }
            }
        });
    }
}

impl StateHolder for CreateFolderViewModel {
    type State = CreateFolderUiState;
    type Action = CreateFolderAction;
    type Event = CreateFolderEvent;

    fn handle(&self, action: CreateFolderAction) {
        match action {
            CreateFolderAction::SaveClicked => self.save(),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> CreateFolderUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<CreateFolderUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<CreateFolderEvent> {
        self.events.subscribe()
    }
}
