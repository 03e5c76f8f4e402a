use crate::ui::mvi::Reducer;
use crate::ui::study_set_detail::intent::StudySetDetailAction;
use crate::ui::study_set_detail::state::StudySetDetailUiState;

pub struct StudySetDetailReducer;

impl Reducer for StudySetDetailReducer {
    type State = StudySetDetailUiState;
    type Intent = StudySetDetailAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudySetDetailAction::Load { id } => StudySetDetailUiState { id, ..state },
            StudySetDetailAction::LoadStarted | StudySetDetailAction::MutationStarted => {
                StudySetDetailUiState {
                    is_loading: true,
                    error_message: String::new(),
                    ..state
                }
            }
            StudySetDetailAction::Loaded(Ok(mut study_set)) => StudySetDetailUiState {
                flashcards: std::mem::take(&mut study_set.flashcards),
                study_set: Some(study_set),
                is_loading: false,
                ..state
            },
            StudySetDetailAction::Loaded(Err(error_message)) => StudySetDetailUiState {
                error_message,
                is_loading: false,
                ..state
            },
            StudySetDetailAction::MutationFinished(_) => StudySetDetailUiState {
                is_loading: false,
                ..state
            },
            StudySetDetailAction::Delete | StudySetDetailAction::ResetProgress(_) => state,
        }
    }
}
