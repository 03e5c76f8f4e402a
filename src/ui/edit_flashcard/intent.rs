use crate::domain::FlashCard;
use crate::ui::flashcard_form::FormEdit;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditFlashCardAction {
    /// Seed the editor with the card being edited.
    Load { flashcard: FlashCard },
    Form(FormEdit),
    SaveFlashCard,
    SaveStarted,
    SaveFinished(Result<FlashCard, String>),
}

impl Intent for EditFlashCardAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum EditFlashCardEvent {
    FlashCardUpdated(FlashCard),
    FlashCardUpdateError(String),
}
