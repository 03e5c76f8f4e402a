use crate::ui::flashcard_form::FlashCardForm;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateFlashCardUiState {
    pub study_set_id: String,
    pub form: FlashCardForm,
    pub is_loading: bool,
    pub is_uploading: bool,
}

impl UiState for CreateFlashCardUiState {}
