use crate::domain::{FlashCard, FlipCardStatus};
use crate::ui::flip_flashcard::intent::FlipFlashCardAction;
use crate::ui::flip_flashcard::state::FlipFlashCardUiState;
use crate::ui::mvi::Reducer;

pub struct FlipFlashCardReducer;

impl Reducer for FlipFlashCardReducer {
    type State = FlipFlashCardUiState;
    type Intent = FlipFlashCardAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlipFlashCardAction::Load { study_set_id } => FlipFlashCardUiState {
                study_set_id,
                ..state
            },
            FlipFlashCardAction::LoadStarted => FlipFlashCardUiState {
                is_loading: true,
                error_message: String::new(),
                ..state
            },
            FlipFlashCardAction::Loaded(Ok(flashcards)) => FlipFlashCardUiState {
                study_set_id: state.study_set_id,
                is_ended: flashcards.is_empty(),
                flashcards,
                ..Default::default()
            },
            FlipFlashCardAction::Loaded(Err(error_message)) => FlipFlashCardUiState {
                error_message,
                is_loading: false,
                ..state
            },
            FlipFlashCardAction::SwipeLeft(is_swiping_left) => FlipFlashCardUiState {
                is_swiping_left,
                ..state
            },
            FlipFlashCardAction::SwipeRight(is_swiping_right) => FlipFlashCardUiState {
                is_swiping_right,
                ..state
            },
            FlipFlashCardAction::UpdateCountKnown {
                is_increase,
                flashcard_id,
            } => {
                let count_known = step(state.count_known, is_increase);
                let status = if is_increase {
                    FlipCardStatus::Know
                } else {
                    FlipCardStatus::None
                };
                FlipFlashCardUiState {
                    count_known,
                    flashcards: with_status(state.flashcards, &flashcard_id, status),
                    ..state
                }
            }
            FlipFlashCardAction::UpdateCountStillLearning {
                is_increase,
                flashcard_id,
            } => {
                let count_still_learning = step(state.count_still_learning, is_increase);
                let status = if is_increase {
                    FlipCardStatus::StillLearning
                } else {
                    FlipCardStatus::None
                };
                FlipFlashCardUiState {
                    count_still_learning,
                    flashcards: with_status(state.flashcards, &flashcard_id, status),
                    ..state
                }
            }
            FlipFlashCardAction::UpdateCardIndex(index) => at_index(state, index),
            FlipFlashCardAction::Swipe { id } => {
                if state.current_card().map(|card| card.id.as_str()) != Some(id.as_str()) {
                    return state;
                }
                let next = state.current_index + 1;
                at_index(
                    FlipFlashCardUiState {
                        is_swiping_left: false,
                        is_swiping_right: false,
                        ..state
                    },
                    next,
                )
            }
            FlipFlashCardAction::FlipStatusSaved(saved) => {
                let flashcards = state
                    .flashcards
                    .into_iter()
                    .map(|card| if card.id == saved.id { saved.clone() } else { card })
                    .collect();
                FlipFlashCardUiState { flashcards, ..state }
            }
        }
    }
}

fn step(count: u32, is_increase: bool) -> u32 {
    if is_increase {
        count.saturating_add(1)
    } else {
        count.saturating_sub(1)
    }
}

fn with_status(mut cards: Vec<FlashCard>, id: &str, status: FlipCardStatus) -> Vec<FlashCard> {
    if let Some(card) = cards.iter_mut().find(|card| card.id == id) {
        card.flip_status = status;
    }
    cards
}

/// Clamp to `0..=len`; reaching `len` ends the session.
fn at_index(state: FlipFlashCardUiState, index: usize) -> FlipFlashCardUiState {
    let current_index = index.min(state.flashcards.len());
    FlipFlashCardUiState {
        is_ended: current_index == state.flashcards.len(),
        current_index,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(ids: &[&str]) -> FlipFlashCardUiState {
        let cards = ids
            .iter()
            .map(|id| FlashCard {
                id: id.to_string(),
                ..Default::default()
            })
            .collect();
        FlipFlashCardReducer::reduce(
            FlipFlashCardUiState::default(),
            FlipFlashCardAction::Loaded(Ok(cards)),
        )
    }

    #[test]
    fn test_counts_never_negative() {
        let state = FlipFlashCardReducer::reduce(
            deck(&["a"]),
            FlipFlashCardAction::UpdateCountKnown {
                is_increase: false,
                flashcard_id: "a".into(),
            },
        );
        assert_eq!(state.count_known, 0);

        let state = FlipFlashCardReducer::reduce(
            state,
            FlipFlashCardAction::UpdateCountStillLearning {
                is_increase: true,
                flashcard_id: "a".into(),
            },
        );
        assert_eq!(state.count_still_learning, 1);
        assert_eq!(state.flashcards[0].flip_status, FlipCardStatus::StillLearning);
    }

    #[test]
    fn test_swiping_through_deck_ends_session() {
        let mut state = deck(&["a", "b"]);
        assert!(!state.is_ended);
        state = FlipFlashCardReducer::reduce(state, FlipFlashCardAction::Swipe { id: "a".into() });
        assert_eq!(state.current_index, 1);
        // A stale swipe for a card already gone is ignored.
        state = FlipFlashCardReducer::reduce(state, FlipFlashCardAction::Swipe { id: "a".into() });
        assert_eq!(state.current_index, 1);
        state = FlipFlashCardReducer::reduce(state, FlipFlashCardAction::Swipe { id: "b".into() });
        assert_eq!(state.current_index, 2);
        assert!(state.is_ended);
        assert!(state.current_card().is_none());
    }

    #[test]
    fn test_card_index_is_clamped() {
        let state = FlipFlashCardReducer::reduce(deck(&["a", "b"]), FlipFlashCardAction::UpdateCardIndex(9));
        assert_eq!(state.current_index, 2);
        assert!(state.is_ended);

        let state = FlipFlashCardReducer::reduce(state, FlipFlashCardAction::UpdateCardIndex(0));
        assert_eq!(state.current_index, 0);
        assert!(!state.is_ended);
    }

    #[test]
    fn test_empty_deck_is_already_ended() {
        assert!(deck(&[]).is_ended);
    }
}
