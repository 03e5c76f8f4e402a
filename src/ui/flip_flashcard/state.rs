use crate::domain::FlashCard;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlipFlashCardUiState {
    pub study_set_id: String,
    pub flashcards: Vec<FlashCard>,
    /// Equals `flashcards.len()` once every card was swiped.
    pub current_index: usize,
    pub count_known: u32,
    pub count_still_learning: u32,
    pub is_swiping_left: bool,
    pub is_swiping_right: bool,
    pub is_ended: bool,
    pub is_loading: bool,
    pub error_message: String,
}

impl UiState for FlipFlashCardUiState {}

impl FlipFlashCardUiState {
    pub fn current_card(&self) -> Option<&FlashCard> {
        self.flashcards.get(self.current_index)
    }
}
