use crate::ui::edit_flashcard::intent::EditFlashCardAction;
use crate::ui::edit_flashcard::state::EditFlashCardUiState;
use crate::ui::flashcard_form::FlashCardForm;
use crate::ui::mvi::Reducer;

pub struct EditFlashCardReducer;

impl Reducer for EditFlashCardReducer {
    type State = EditFlashCardUiState;
    type Intent = EditFlashCardAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditFlashCardAction::Load { flashcard } => EditFlashCardUiState {
                form: FlashCardForm::from_card(&flashcard),
                flashcard_id: flashcard.id,
                study_set_id: flashcard.study_set_id,
                is_loading: false,
            },
            EditFlashCardAction::Form(edit) => EditFlashCardUiState {
                form: state.form.apply(edit),
                ..state
            },
            EditFlashCardAction::SaveFlashCard => EditFlashCardUiState {
                form: state.form.validated(),
                ..state
            },
            EditFlashCardAction::SaveStarted => EditFlashCardUiState {
                is_loading: true,
                ..state
            },
            EditFlashCardAction::SaveFinished(Ok(card)) => EditFlashCardUiState {
                form: FlashCardForm::from_card(&card),
                is_loading: false,
                ..state
            },
            EditFlashCardAction::SaveFinished(Err(_)) => EditFlashCardUiState {
                is_loading: false,
                ..state
            },
        }
    }
}
