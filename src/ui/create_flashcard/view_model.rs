use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::CreateFlashCardRequest;
use crate::repository::FlashCardRepository;
use crate::resource::Resource;
use crate::session::TokenManager;
use crate::ui::auth_session::access_token;
use crate::ui::create_flashcard::intent::{CreateFlashCardAction, CreateFlashCardEvent};
use crate::ui::create_flashcard::reducer::CreateFlashCardReducer;
use crate::ui::create_flashcard::state::CreateFlashCardUiState;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};

const SAVE: &str = "save_flashcard";
const UPLOAD: &str = "upload_image";

pub struct CreateFlashCardViewModel {
    store: Store<CreateFlashCardReducer>,
    events: EventChannel<CreateFlashCardEvent>,
    tasks: TaskScope,
    flashcards: Arc<dyn FlashCardRepository>,
    tokens: TokenManager,
}

impl CreateFlashCardViewModel {
    pub fn new(flashcards: Arc<dyn FlashCardRepository>, tokens: TokenManager) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            flashcards,
            tokens,
        }
    }

    fn save(&self) {
        self.store.dispatch(CreateFlashCardAction::SaveFlashCard);
        let state = self.store.state();
        if state.form.has_errors() {
            return;
        }
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => {
                return self
                    .events
                    .emit(CreateFlashCardEvent::FlashCardSaveError(message))
            }
        };

        let request = CreateFlashCardRequest {
            study_set_id: state.study_set_id.clone(),
            term: state.form.term.trim().to_string(),
            definition: state.form.definition.trim().to_string(),
            definition_image_url: state.form.definition_image_url.clone(),
            hint: state.form.hint_to_send(),
            explanation: state.form.explanation_to_send(),
        };
        let results = self.flashcards.create_flashcard(token, request);
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(SAVE, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(CreateFlashCardAction::SaveStarted);
                    }
                    Resource::Success(card) => {
                        tracing::info!(flashcard_id = %card.id, "Flashcard created");
                        store.dispatch(CreateFlashCardAction::SaveFinished(Ok(card.clone())));
                        events.emit(CreateFlashCardEvent::FlashCardSaved(card));
                    }
                    Resource::Error(message) => {
                        store.dispatch(CreateFlashCardAction::SaveFinished(Err(message.clone())));
                        events.emit(CreateFlashCardEvent::FlashCardSaveError(message));
                    }
                }
            }
        });
    }

    fn upload(&self, file_name: String, bytes: Vec<u8>) {
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => {
                return self
                    .events
                    .emit(CreateFlashCardEvent::ImageUploadError(message))
            }
        };
        let results = self.flashcards.upload_image(token, file_name, bytes);
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(UPLOAD, LaunchPolicy::Supersede, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(CreateFlashCardAction::UploadStarted);
                    }
                    Resource::Success(image) => {
                        let url = image.url.clone();
                        store.dispatch(CreateFlashCardAction::UploadFinished(Ok(image)));
                        events.emit(CreateFlashCardEvent::ImageUploaded(url));
                    }
                    Resource::Error(message) => {
                        store.dispatch(CreateFlashCardAction::UploadFinished(Err(message.clone())));
                        events.emit(CreateFlashCardEvent::ImageUploadError(message));
                    }
                }
            }
        });
    }
}

impl StateHolder for CreateFlashCardViewModel {
    type State = CreateFlashCardUiState;
    type Action = CreateFlashCardAction;
    type Event = CreateFlashCardEvent;

    fn handle(&self, action: CreateFlashCardAction) {
        match action {
            CreateFlashCardAction::SaveFlashCard => self.save(),
            CreateFlashCardAction::UploadImage { file_name, bytes } => self.upload(file_name, bytes),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> CreateFlashCardUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<CreateFlashCardUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<CreateFlashCardEvent> {
        self.events.subscribe()
    }
}
