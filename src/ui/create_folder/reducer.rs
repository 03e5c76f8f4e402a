use crate::ui::create_folder::intent::CreateFolderAction;
use crate::ui::create_folder::state::CreateFolderUiState;
use crate::ui::mvi::Reducer;
use crate::validation::{self, TITLE_REQUIRED};

pub struct CreateFolderReducer;

impl Reducer for CreateFolderReducer {
    type State = CreateFolderUiState;
    type Intent = CreateFolderAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateFolderAction::TitleChanged(title) => CreateFolderUiState {
                title_error: validation::required_error(&title, TITLE_REQUIRED),
                title,
                ..state
            },
            CreateFolderAction::DescriptionChanged(description) => CreateFolderUiState {
                description,
                ..state
            },
            CreateFolderAction::PublicChanged(is_public) => CreateFolderUiState {
                is_public,
                ..state
            },
            CreateFolderAction::SaveClicked => CreateFolderUiState {
                title_error: validation::required_error(&state.title, TITLE_REQUIRED),
                ..state
            },
            CreateFolderAction::SaveStarted => CreateFolderUiState {
                is_loading: true,
                ..state
            },
            CreateFolderAction::SaveFinished(_) => CreateFolderUiState {
                is_loading: false,
                ..state
            },
        }
    }
}
