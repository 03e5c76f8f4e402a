use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateFolderUiState {
    pub title: String,
    pub title_error: String,
    pub description: String,
    pub is_public: bool,
    pub is_loading: bool,
}

impl UiState for CreateFolderUiState {}
