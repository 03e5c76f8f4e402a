use crate::domain::StudyClass;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassDetailUiState {
    pub is_login: bool,
    /// Invite code the screen was opened with, if any.
    pub join_class_code: String,
    pub id: String,
    pub title: String,
    pub description: String,
    /// Classes owned by the signed-in user.
    pub classes: Vec<StudyClass>,
    pub is_loading: bool,
    pub is_joining: bool,
    pub error_message: String,
}

impl UiState for ClassDetailUiState {}
