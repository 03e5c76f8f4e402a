use crate::ui::flashcard_form::FlashCardForm;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditFlashCardUiState {
    pub flashcard_id: String,
    pub study_set_id: String,
    pub form: FlashCardForm,
    pub is_loading: bool,
}

impl UiState for EditFlashCardUiState {}
