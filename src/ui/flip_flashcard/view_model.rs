use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, watch};

use crate::domain::FlipCardStatus;
use crate::repository::{FlashCardRepository, StudySetRepository};
use crate::resource::Resource;
use crate::session::TokenManager;
use crate::ui::auth_session::access_token;
use crate::ui::flip_flashcard::intent::{FlipFlashCardAction, FlipFlashCardEvent};
use crate::ui::flip_flashcard::reducer::FlipFlashCardReducer;
use crate::ui::flip_flashcard::state::FlipFlashCardUiState;
use crate::ui::mvi::{EventChannel, LaunchPolicy, StateHolder, Store, TaskScope};

const LOAD: &str = "load_flashcards";

fn status_key(flashcard_id: &str) -> String {
    format!("flip_status:{flashcard_id}")
}

pub struct FlipFlashCardViewModel {
    store: Store<FlipFlashCardReducer>,
    events: EventChannel<FlipFlashCardEvent>,
    tasks: TaskScope,
    study_sets: Arc<dyn StudySetRepository>,
    flashcards: Arc<dyn FlashCardRepository>,
    tokens: TokenManager,
}

impl FlipFlashCardViewModel {
    pub fn new(
        study_sets: Arc<dyn StudySetRepository>,
        flashcards: Arc<dyn FlashCardRepository>,
        tokens: TokenManager,
    ) -> Self {
        Self {
            store: Store::default(),
            events: EventChannel::new(),
            tasks: TaskScope::new(),
            study_sets,
            flashcards,
            tokens,
        }
    }

    fn load(&self, study_set_id: String) {
        self.store.dispatch(FlipFlashCardAction::Load {
            study_set_id: study_set_id.clone(),
        });
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => {
                self.store.dispatch(FlipFlashCardAction::Loaded(Err(message)));
                return;
            }
        };
        let results = self.study_sets.get_study_set_by_id(token, study_set_id);
        let store = self.store.clone();

        self.tasks.launch(LOAD, LaunchPolicy::Supersede, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                let action = match resource.map(|study_set| study_set.flashcards).into_result() {
                    None => FlipFlashCardAction::LoadStarted,
                    Some(result) => FlipFlashCardAction::Loaded(result),
                };
                store.dispatch(action);
            }
        });
    }

    fn status_of(&self, flashcard_id: &str) -> Option<FlipCardStatus> {
        self.store
            .state()
            .flashcards
            .iter()
            .find(|card| card.id == flashcard_id)
            .map(|card| card.flip_status)
    }

    /// Undo drops any in-flight save for the card. A card that already
    /// carried an outcome is written back as `None`.
    fn revert_status(&self, flashcard_id: String, before: Option<FlipCardStatus>) {
        match before {
            Some(FlipCardStatus::None) | None => self.tasks.cancel(&status_key(&flashcard_id)),
            Some(_) => self.save_status(flashcard_id, FlipCardStatus::None),
        }
    }

    /// Persist the card's outcome; a newer outcome for the same card wins.
    fn save_status(&self, flashcard_id: String, status: FlipCardStatus) {
        let key = status_key(&flashcard_id);
        let token = match access_token(&self.tokens) {
            Ok(token) => token,
            Err(message) => {
                self.tasks.cancel(&key);
                return self.events.emit(FlipFlashCardEvent::ShowError(message));
            }
        };
        let results = self
            .flashcards
            .update_flip_status(token, flashcard_id, status);
        let store = self.store.clone();
        let events = self.events.clone();

        self.tasks.launch(key, LaunchPolicy::Supersede, async move {
            let mut results = results;
            while let Some(resource) = results.next().await {
                match resource {
                    Resource::Loading => {}
                    Resource::Success(card) => {
                        store.dispatch(FlipFlashCardAction::FlipStatusSaved(card));
                    }
                    Resource::Error(message) => {
                        tracing::warn!(error = %message, "Flip status not saved");
                        events.emit(FlipFlashCardEvent::ShowError(message));
                    }
                }
            }
        });
    }
}

impl StateHolder for FlipFlashCardViewModel {
    type State = FlipFlashCardUiState;
    type Action = FlipFlashCardAction;
    type Event = FlipFlashCardEvent;

    fn handle(&self, action: FlipFlashCardAction) {
        match action {
            FlipFlashCardAction::Load { study_set_id } => self.load(study_set_id),
            FlipFlashCardAction::UpdateCountKnown {
                is_increase,
                ref flashcard_id,
            } => {
                let flashcard_id = flashcard_id.clone();
                let before = self.status_of(&flashcard_id);
                self.store.dispatch(action);
                if is_increase {
                    self.save_status(flashcard_id, FlipCardStatus::Know);
                } else {
                    self.revert_status(flashcard_id, before);
                }
            }
            FlipFlashCardAction::UpdateCountStillLearning {
                is_increase,
                ref flashcard_id,
            } => {
                let flashcard_id = flashcard_id.clone();
                let before = self.status_of(&flashcard_id);
                self.store.dispatch(action);
                if is_increase {
                    self.save_status(flashcard_id, FlipCardStatus::StillLearning);
                } else {
                    self.revert_status(flashcard_id, before);
                }
            }
            other => {
                self.store.dispatch(other);
            }
        }
    }

    fn state(&self) -> FlipFlashCardUiState {
        self.store.state()
    }

    fn subscribe_state(&self) -> watch::Receiver<FlipFlashCardUiState> {
        self.store.subscribe()
    }

    fn subscribe_events(&self) -> broadcast::Receiver<FlipFlashCardEvent> {
        self.events.subscribe()
    }
}
