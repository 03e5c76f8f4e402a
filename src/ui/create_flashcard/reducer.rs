use crate::ui::create_flashcard::intent::CreateFlashCardAction;
use crate::ui::create_flashcard::state::CreateFlashCardUiState;
use crate::ui::flashcard_form::FlashCardForm;
use crate::ui::mvi::Reducer;

pub struct CreateFlashCardReducer;

impl Reducer for CreateFlashCardReducer {
    type State = CreateFlashCardUiState;
    type Intent = CreateFlashCardAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateFlashCardAction::Init { study_set_id } => CreateFlashCardUiState {
                study_set_id,
                ..state
            },
            CreateFlashCardAction::Form(edit) => CreateFlashCardUiState {
                form: state.form.apply(edit),
                ..state
            },
            CreateFlashCardAction::SaveFlashCard => CreateFlashCardUiState {
                form: state.form.validated(),
                ..state
            },
            CreateFlashCardAction::SaveStarted => CreateFlashCardUiState {
                is_loading: true,
                ..state
            },
            // Ready for the next card in the same set; an upload still in
            // flight belongs to that next card.
            CreateFlashCardAction::SaveFinished(Ok(_)) => CreateFlashCardUiState {
                study_set_id: state.study_set_id,
                is_uploading: state.is_uploading,
                ..Default::default()
            },
            CreateFlashCardAction::SaveFinished(Err(_)) => CreateFlashCardUiState {
                is_loading: false,
                ..state
            },
            CreateFlashCardAction::UploadStarted => CreateFlashCardUiState {
                is_uploading: true,
                ..state
            },
            CreateFlashCardAction::UploadFinished(Ok(image)) => CreateFlashCardUiState {
                is_uploading: false,
                form: FlashCardForm {
                    definition_image_url: Some(image.url),
                    ..state.form
                },
                ..state
            },
            CreateFlashCardAction::UploadFinished(Err(_)) => CreateFlashCardUiState {
                is_uploading: false,
                ..state
            },
            CreateFlashCardAction::UploadImage { .. } => state,
        }
    }
}
