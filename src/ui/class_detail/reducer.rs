use crate::ui::class_detail::intent::ClassDetailAction;
use crate::ui::class_detail::state::ClassDetailUiState;
use crate::ui::mvi::Reducer;

pub struct ClassDetailReducer;

impl Reducer for ClassDetailReducer {
    type State = ClassDetailUiState;
    type Intent = ClassDetailAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ClassDetailAction::Init {
                code,
                id,
                title,
                description,
            } => ClassDetailUiState {
                is_login: true,
                join_class_code: code,
                id,
                title,
                description,
                ..state
            },
            ClassDetailAction::JoinClassCodeChanged(join_class_code) => ClassDetailUiState {
                join_class_code,
                ..state
            },
            ClassDetailAction::LoggedOut => ClassDetailUiState {
                is_login: false,
                ..state
            },
            ClassDetailAction::ClassesStarted => ClassDetailUiState {
                is_loading: true,
                error_message: String::new(),
                ..state
            },
            ClassDetailAction::ClassesLoaded(Ok(classes)) => ClassDetailUiState {
                classes,
                is_loading: false,
                ..state
            },
            ClassDetailAction::ClassesLoaded(Err(error_message)) => ClassDetailUiState {
                error_message,
                is_loading: false,
                ..state
            },
            ClassDetailAction::JoinStarted => ClassDetailUiState {
                is_joining: true,
                ..state
            },
            ClassDetailAction::JoinFinished(Ok(joined)) => {
                let mut classes = state.classes;
                if !classes.iter().any(|class| class.id == joined.id) {
                    classes.push(joined);
                }
                ClassDetailUiState {
                    classes,
                    is_joining: false,
                    join_class_code: String::new(),
                    ..state
                }
            }
            ClassDetailAction::JoinFinished(Err(_)) => ClassDetailUiState {
                is_joining: false,
                ..state
            },
            ClassDetailAction::Refresh
            | ClassDetailAction::JoinClassClicked
            | ClassDetailAction::NavigateToWelcomeClicked => state,
        }
    }
}
