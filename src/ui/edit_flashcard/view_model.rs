use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::EditFlashCardRequest;
use crate::repository::FlashCardRepository;
use crate::resource::Resource;
use crate::session::TokenManager;
use crate::ui::auth_session::access_token;
use crate::ui::edit_flashcard::intent::{EditFlashCardAction, EditFlashCardEvent};
use crate::ui::edit_flashcard::reducer::EditFlashCardReducer;
use crate::ui::edit_flashcard::state::EditFlashCardUiState;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};

const SAVE: &str = "update_flashcard";

pub struct EditFlashCardViewModel {
    store: Store<EditFlashCardReducer>,
    events: EventChannel<EditFlashCardEvent>,
    tasks: TaskScope,
    flashcards: Arc<dyn FlashCardRepository>,
    tokens: TokenManager,
}

impl EditFlashCardViewModel {
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
        self.store.dispatch(EditFlashCardAction::SaveFlashCard);
        let state = self.store.state();
        if state.form.has_errors() {
            return;
        }
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => {
                return self
                    .events
                    .emit(EditFlashCardEvent::FlashCardUpdateError(message))
            }
        };

        let request = EditFlashCardRequest {
            term: state.form.term.trim().to_string(),
            definition: state.form.definition.trim().to_string(),
            definition_image_url: state.form.definition_image_url.clone(),
            hint: state.form.hint_to_send(),
            explanation: state.form.explanation_to_send(),
        };
        let results = self
            .flashcards
            .update_flashcard(token, state.flashcard_id, request);
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(SAVE, LaunchPolicy::Ignore, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {
                        store.dispatch(EditFlashCardAction::SaveStarted);
                    }
                    Resource::Success(card) => {
                        store.dispatch(EditFlashCardAction::SaveFinished(Ok(card.clone())));
                        events.emit(EditFlashCardEvent::FlashCardUpdated(card));
                    }
                    Resource::Error(message) => {
                        store.dispatch(EditFlashCardAction::SaveFinished(Err(message.clone())));
                        events.emit(EditFlashCardEvent::FlashCardUpdateError(message));
                    }
                }
            }
        });
    }
}

impl StateHolder for EditFlashCardViewModel {
    type State = EditFlashCardUiState;
    type Action = EditFlashCardAction;
    type Event = EditFlashCardEvent;

    fn handle(&self, action: EditFlashCardAction) {
        match action {
            EditFlashCardAction::SaveFlashCard => self.save(),
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> EditFlashCardUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<EditFlashCardUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<EditFlashCardEvent> {
        self.events.subscribe()
    }
}
