//! Card editor fields shared by the create and edit screens.

use crate::domain::FlashCard;
use crate::validation::{self, DEFINITION_REQUIRED, TERM_REQUIRED};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlashCardForm {
    pub term: String,
    pub term_error: String,
    pub definition: String,
    pub definition_error: String,
    pub definition_image_url: Option<String>,
    pub hint: String,
    pub show_hint: bool,
    pub explanation: String,
    pub show_explanation: bool,
}

/// Field edits accepted by [`FlashCardForm::apply`].
#[derive(Debug, Clone)]
pub enum FormEdit {
    TermChanged(String),
    DefinitionChanged(String),
    DefinitionImageChanged(Option<String>),
    HintChanged(String),
    ShowHintClicked(bool),
    ExplanationChanged(String),
    ShowExplanationClicked(bool),
}

impl FlashCardForm {
    pub fn from_card(card: &FlashCard) -> Self {
        let hint = card.hint.clone().unwrap_or_default();
        let explanation = card.explanation.clone().unwrap_or_default();
        Self {
            term: card.term.clone(),
            definition: card.definition.clone(),
            definition_image_url: card.definition_image_url.clone(),
            show_hint: !hint.is_empty(),
            hint,
            show_explanation: !explanation.is_empty(),
            explanation,
            ..Self::default()
        }
    }

    pub fn apply(self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::TermChanged(term) => Self {
                term_error: validation::required_error(&term, TERM_REQUIRED),
                term,
                ..self
            },
            FormEdit::DefinitionChanged(definition) => Self {
                definition_error: validation::required_error(&definition, DEFINITION_REQUIRED),
                definition,
                ..self
            },
            FormEdit::DefinitionImageChanged(definition_image_url) => Self {
                definition_image_url,
                ..self
            },
            FormEdit::HintChanged(hint) => Self { hint, ..self },
            FormEdit::ShowHintClicked(show_hint) => Self { show_hint, ..self },
            FormEdit::ExplanationChanged(explanation) => Self {
                explanation,
                ..self
            },
            FormEdit::ShowExplanationClicked(show_explanation) => Self {
                show_explanation,
                ..self
            },
        }
    }

    /// Re-run every validator.
    pub fn validated(self) -> Self {
        Self {
            term_error: validation::required_error(&self.term, TERM_REQUIRED),
            definition_error: validation::required_error(&self.definition, DEFINITION_REQUIRED),
            ..self
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.term_error.is_empty() || !self.definition_error.is_empty()
    }

    /// The hint to send; hidden or blank hints are dropped.
    pub fn hint_to_send(&self) -> Option<String> {
        visible_text(self.show_hint, &self.hint)
    }

    pub fn explanation_to_send(&self) -> Option<String> {
        visible_text(self.show_explanation, &self.explanation)
    }
}

fn visible_text(shown: bool, text: &str) -> Option<String> {
    let text = text.trim();
    (shown && !text.is_empty()).then(|| text.to_string())
}
