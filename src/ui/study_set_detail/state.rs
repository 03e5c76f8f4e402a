use crate::domain::{FlashCard, StudySet};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudySetDetailUiState {
    pub id: String,
    pub study_set: Option<StudySet>,
    pub flashcards: Vec<FlashCard>,
    pub is_loading: bool,
    pub error_message: String,
}

impl UiState for StudySetDetailUiState {}
