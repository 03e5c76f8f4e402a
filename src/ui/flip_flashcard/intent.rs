use crate::domain::FlashCard;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FlipFlashCardAction {
    Load { study_set_id: String },
    SwipeLeft(bool),
    SwipeRight(bool),
    UpdateCountKnown { is_increase: bool, flashcard_id: String },
    UpdateCountStillLearning { is_increase: bool, flashcard_id: String },
    UpdateCardIndex(usize),
    /// The card `id` left the stack.
    Swipe { id: String },
    LoadStarted,
    Loaded(Result<Vec<FlashCard>, String>),
    FlipStatusSaved(FlashCard),
}

impl Intent for FlipFlashCardAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum FlipFlashCardEvent {
    ShowError(String),
}
